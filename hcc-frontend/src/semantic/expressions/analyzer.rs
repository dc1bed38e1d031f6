//! Main expression analyzer that dispatches on the expression kind

use crate::ast::*;
use crate::semantic::context::AnalysisContext;
use crate::semantic::errors::ContractViolation;
use crate::semantic::symbols::SymbolTable;
use crate::types::Type;
use hcc_common::SymbolId;

use super::assignment::AssignmentAnalyzer;
use super::binary::BinaryOperationAnalyzer;
use super::unary::UnaryOperationAnalyzer;
use super::Operand;

pub struct ExpressionAnalyzer<'a> {
    pub symbols: &'a SymbolTable,
}

impl<'a> ExpressionAnalyzer<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Analyze an expression, commit its type, and return it
    pub fn analyze(&self, expr: &Expression, ctx: &mut AnalysisContext) -> Type {
        let expr_type = match &expr.kind {
            ExpressionKind::IntLiteral(_) => Type::int(),
            ExpressionKind::CharLiteral(_) => Type::char(),
            ExpressionKind::BoolLiteral(_) => Type::bool(),
            ExpressionKind::StringLiteral(_) => Type::pointer(Type::char(), 1),

            ExpressionKind::Identifier { name, symbol_id } => {
                self.identifier_type(expr, name, *symbol_id, ctx)
            }

            ExpressionKind::Binary { op, left, right } => {
                let left_type = self.analyze(left, ctx);
                let right_type = self.analyze(right, ctx);

                BinaryOperationAnalyzer.analyze(
                    *op,
                    expr,
                    Operand::new(left, &left_type),
                    Operand::new(right, &right_type),
                    ctx,
                )
            }

            ExpressionKind::Unary { op, operand } => {
                let operand_type = self.analyze(operand, ctx);
                UnaryOperationAnalyzer.analyze(*op, expr, Operand::new(operand, &operand_type), ctx)
            }

            ExpressionKind::Assign { target, value } => {
                let target_type = self.analyze(target, ctx);
                let value_type = self.analyze(value, ctx);

                AssignmentAnalyzer.analyze(
                    expr,
                    Operand::new(target, &target_type),
                    Operand::new(value, &value_type),
                    ctx,
                )
            }

            ExpressionKind::Dereference(operand) => self.analyze_dereference(operand, ctx),
            ExpressionKind::AddressOf(operand) => self.analyze_address_of(operand, ctx),
            ExpressionKind::Index { base, offset } => self.analyze_index(base, offset, ctx),

            ExpressionKind::Call { callee, arguments } => {
                self.analyze_call(callee, arguments, ctx)
            }
        };

        ctx.commit(expr.node_id, expr_type)
    }

    /// Identifiers never fail: they yield the declared type of their symbol
    fn identifier_type(
        &self,
        expr: &Expression,
        name: &str,
        symbol_id: SymbolId,
        ctx: &mut AnalysisContext,
    ) -> Type {
        match self.symbols.type_of(symbol_id) {
            Some(declared) => declared.clone(),
            None => {
                ctx.violation(ContractViolation::UnresolvedSymbol {
                    name: name.to_string(),
                    symbol_id,
                    location: expr.location,
                });
                Type::error()
            }
        }
    }
}
