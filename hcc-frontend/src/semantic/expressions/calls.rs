//! Function calls

use crate::ast::Expression;
use crate::semantic::context::AnalysisContext;
use crate::types::Type;
use hcc_common::DiagnosticKind;
use log::trace;

use super::ExpressionAnalyzer;

impl<'a> ExpressionAnalyzer<'a> {
    /// A call with a function-typed callee always yields the declared return
    /// type; argument problems are reported but do not change it.
    pub(super) fn analyze_call(
        &self,
        callee: &Expression,
        arguments: &[Expression],
        ctx: &mut AnalysisContext,
    ) -> Type {
        let callee_type = self.analyze(callee, ctx);
        let Some(function) = callee_type.as_function() else {
            ctx.report(DiagnosticKind::BadCallee, callee);
            return Type::error();
        };

        let argument_types: Vec<Type> = arguments
            .iter()
            .map(|argument| self.analyze(argument, ctx))
            .collect();

        if argument_types.len() != function.formals.len() {
            trace!(
                "call expects {} arguments, got {}",
                function.formals.len(),
                argument_types.len()
            );
            ctx.report(DiagnosticKind::BadArgumentCount, callee);
        } else {
            for ((argument, actual), formal) in arguments
                .iter()
                .zip(&argument_types)
                .zip(&function.formals)
            {
                if actual != formal && !actual.is_error() {
                    ctx.report(DiagnosticKind::BadArgumentMatch, argument);
                }
            }
        }

        (*function.return_type).clone()
    }
}
