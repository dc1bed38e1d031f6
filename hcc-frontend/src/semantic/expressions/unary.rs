//! Unary expression operations and type checking

use crate::ast::UnaryOp;
use crate::semantic::context::AnalysisContext;
use crate::types::Type;
use hcc_common::{DiagnosticKind, HasLocation};

use super::Operand;

pub struct UnaryOperationAnalyzer;

impl UnaryOperationAnalyzer {
    /// Analyze unary operation and return result type
    pub fn analyze(
        &self,
        op: UnaryOp,
        node: &impl HasLocation,
        operand: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        match op {
            UnaryOp::Negate => self.check_integer_operand(node, operand, ctx),
            UnaryOp::Not => {
                if operand.ty.is_bool() {
                    operand.ty.clone()
                } else if operand.ty.is_error() {
                    Type::error()
                } else {
                    ctx.report(DiagnosticKind::BadLogicalOperand, &operand);
                    Type::error()
                }
            }
        }
    }

    /// Shared by negation and the `++`/`--` statements. A pointer operand is
    /// reported at `node`, any other bad operand at the operand itself.
    pub fn check_integer_operand(
        &self,
        node: &impl HasLocation,
        operand: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        if operand.ty.is_int() {
            operand.ty.clone()
        } else if operand.ty.is_pointer() {
            ctx.report(DiagnosticKind::InvalidPointerOperator, node);
            Type::error()
        } else if operand.ty.is_error() {
            Type::error()
        } else {
            ctx.report(DiagnosticKind::BadArithmeticOperand, &operand);
            Type::error()
        }
    }
}
