//! Assignment expressions

use crate::ast::Expression;
use crate::semantic::context::AnalysisContext;
use crate::types::Type;
use hcc_common::DiagnosticKind;

use super::Operand;

pub struct AssignmentAnalyzer;

impl AssignmentAnalyzer {
    pub fn analyze(
        &self,
        node: &Expression,
        target: Operand<'_>,
        value: Operand<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        if target.ty.is_function() || value.ty.is_function() {
            if target.ty.is_function() {
                ctx.report(DiagnosticKind::BadAssignmentOperand, &target);
            }
            if value.ty.is_function() {
                ctx.report(DiagnosticKind::BadAssignmentOperand, &value);
            }
            return Type::error();
        }

        // Equal but invalid types (void = void) fall through to the report below
        if target.ty == value.ty && target.ty.is_valid_var_type() {
            return target.ty.clone();
        }

        if target.ty.is_error() || value.ty.is_error() {
            return Type::error();
        }

        ctx.report(DiagnosticKind::InvalidAssignmentOperator, node);
        Type::error()
    }
}
