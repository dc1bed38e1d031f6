//! Binary expression operations and type checking

use crate::ast::{BinaryOp, Expression, OperatorClass};
use crate::semantic::context::AnalysisContext;
use crate::types::Type;
use hcc_common::DiagnosticKind;

use super::Operand;

/// Operand requirements of one operator family
struct OperandRule {
    accepts: fn(&Type) -> bool,
    kind: DiagnosticKind,
    rejects_pointer_pair: bool,
}

const ARITHMETIC: OperandRule = OperandRule {
    accepts: Type::is_int,
    kind: DiagnosticKind::BadArithmeticOperand,
    rejects_pointer_pair: true,
};

const RELATIONAL: OperandRule = OperandRule {
    accepts: Type::is_int,
    kind: DiagnosticKind::BadRelationalOperand,
    rejects_pointer_pair: false,
};

const LOGICAL: OperandRule = OperandRule {
    accepts: Type::is_bool,
    kind: DiagnosticKind::BadLogicalOperand,
    rejects_pointer_pair: false,
};

pub struct BinaryOperationAnalyzer;

impl BinaryOperationAnalyzer {
    /// Analyze binary operation and return result type
    pub fn analyze(
        &self,
        op: BinaryOp,
        node: &Expression,
        left: Operand<'_>,
        right: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        match op.class() {
            OperatorClass::Arithmetic => self.check_operands(&ARITHMETIC, node, left, right, ctx),
            OperatorClass::Relational => self.check_operands(&RELATIONAL, node, left, right, ctx),
            OperatorClass::Logical => self.check_operands(&LOGICAL, node, left, right, ctx),
            OperatorClass::Equality => self.check_equality(node, left, right, ctx),
        }
    }

    /// Arithmetic, relational and logical operators.
    ///
    /// When exactly one operand is `Error` the other operand is reported
    /// even if its own type is acceptable.
    fn check_operands(
        &self,
        rule: &OperandRule,
        node: &Expression,
        left: Operand<'_>,
        right: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        if left.ty == right.ty && (rule.accepts)(left.ty) {
            return left.ty.clone();
        }

        if rule.rejects_pointer_pair && left.ty.is_pointer() && right.ty.is_pointer() {
            ctx.report(DiagnosticKind::InvalidPointerOperator, node);
            return Type::error();
        }

        match (left.ty.is_error(), right.ty.is_error()) {
            (true, true) => {}
            (true, false) => ctx.report(rule.kind, &right),
            (false, true) => ctx.report(rule.kind, &left),
            (false, false) => {
                if !(rule.accepts)(left.ty) {
                    ctx.report(rule.kind, &left);
                }
                if !(rule.accepts)(right.ty) {
                    ctx.report(rule.kind, &right);
                }
            }
        }
        Type::error()
    }

    /// `==` and `!=` report at the operator, never at an operand
    fn check_equality(
        &self,
        node: &Expression,
        left: Operand<'_>,
        right: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        match (left.ty.is_error(), right.ty.is_error()) {
            (true, true) => Type::error(),
            (true, false) | (false, true) => {
                ctx.report(DiagnosticKind::BadEqualityOperands, node);
                Type::error()
            }
            (false, false) if left.ty == right.ty => left.ty.clone(),
            (false, false) => {
                ctx.report(DiagnosticKind::BadEqualityOperands, node);
                Type::error()
            }
        }
    }
}
