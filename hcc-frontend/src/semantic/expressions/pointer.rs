//! Pointer operations: address-of, dereference, and indexing

use crate::ast::Expression;
use crate::semantic::context::AnalysisContext;
use crate::types::Type;
use hcc_common::DiagnosticKind;

use super::ExpressionAnalyzer;

impl<'a> ExpressionAnalyzer<'a> {
    /// Taking a reference surfaces the operand's type unchanged
    pub(super) fn analyze_address_of(
        &self,
        operand: &Expression,
        ctx: &mut AnalysisContext,
    ) -> Type {
        self.analyze(operand, ctx)
    }

    pub(super) fn analyze_dereference(
        &self,
        operand: &Expression,
        ctx: &mut AnalysisContext,
    ) -> Type {
        let operand_type = self.analyze(operand, ctx);
        if operand_type.is_function() {
            ctx.report(DiagnosticKind::DerefFunction, operand);
            return Type::error();
        }
        operand_type
    }

    /// `base[offset]`. The offset is only analyzed once the base is known to
    /// be a pointer, and both failures are reported at the base.
    pub(super) fn analyze_index(
        &self,
        base: &Expression,
        offset: &Expression,
        ctx: &mut AnalysisContext,
    ) -> Type {
        let base_type = self.analyze(base, ctx);
        if !base_type.is_pointer() {
            ctx.report(DiagnosticKind::BadPointerBase, base);
            return Type::error();
        }

        let offset_type = self.analyze(offset, ctx);
        if !offset_type.is_int() {
            ctx.report(DiagnosticKind::BadIndex, base);
            return Type::error();
        }

        offset_type
    }
}
