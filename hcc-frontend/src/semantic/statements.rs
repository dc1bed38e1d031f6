//! Statement type analysis
//!
//! Every statement visit receives the enclosing function's context by value,
//! so a `return` nested anywhere inside `if`/`while` bodies is checked
//! against the right signature.

use crate::ast::*;
use crate::semantic::context::{AnalysisContext, FunctionContext};
use crate::semantic::expressions::{ExpressionAnalyzer, Operand, UnaryOperationAnalyzer};
use crate::semantic::symbols::SymbolTable;
use crate::types::Type;
use hcc_common::DiagnosticKind;
use log::debug;

pub struct StatementAnalyzer<'a> {
    expressions: ExpressionAnalyzer<'a>,
}

impl<'a> StatementAnalyzer<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self {
            expressions: ExpressionAnalyzer::new(symbols),
        }
    }

    /// Variable declarations always pass and are typed void
    pub fn analyze_var_decl(&self, decl: &VarDecl, ctx: &mut AnalysisContext) -> Type {
        ctx.commit(decl.node_id, Type::void())
    }

    pub fn analyze_block(
        &self,
        body: &[Statement],
        enclosing: FunctionContext<'_>,
        ctx: &mut AnalysisContext,
    ) {
        for stmt in body {
            self.analyze_statement(stmt, enclosing, ctx);
        }
    }

    /// Analyze a statement, commit its type, and return it
    pub fn analyze_statement(
        &self,
        stmt: &Statement,
        enclosing: FunctionContext<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        let stmt_type = match &stmt.kind {
            StatementKind::VarDecl(decl) => self.analyze_var_decl(decl, ctx),

            StatementKind::Assign(expr) | StatementKind::Call(expr) => {
                let expr_type = self.expressions.analyze(expr, ctx);
                if expr_type.is_error() {
                    expr_type
                } else {
                    Type::void()
                }
            }

            StatementKind::PostIncrement(lval) | StatementKind::PostDecrement(lval) => {
                let lval_type = self.expressions.analyze(lval, ctx);
                let operand = Operand::new(lval, &lval_type);
                UnaryOperationAnalyzer.check_integer_operand(stmt, operand, ctx)
            }

            StatementKind::If { condition, body } => {
                let stmt_type =
                    self.check_condition(condition, DiagnosticKind::BadIfCondition, ctx);
                self.analyze_block(body, enclosing, ctx);
                stmt_type
            }

            StatementKind::IfElse { condition, then_body, else_body } => {
                let stmt_type =
                    self.check_condition(condition, DiagnosticKind::BadIfCondition, ctx);
                self.analyze_block(then_body, enclosing, ctx);
                self.analyze_block(else_body, enclosing, ctx);
                stmt_type
            }

            StatementKind::While { condition, body } => {
                let stmt_type =
                    self.check_condition(condition, DiagnosticKind::BadWhileCondition, ctx);
                self.analyze_block(body, enclosing, ctx);
                stmt_type
            }

            StatementKind::Return(value) => {
                self.analyze_return(stmt, value.as_ref(), enclosing, ctx)
            }

            StatementKind::Read(dst) => self.analyze_read(dst, ctx),
            StatementKind::Write(src) => self.analyze_write(src, ctx),
        };

        ctx.commit(stmt.node_id, stmt_type)
    }

    /// A valid condition types the statement with the condition's own type
    fn check_condition(
        &self,
        condition: &Expression,
        kind: DiagnosticKind,
        ctx: &mut AnalysisContext,
    ) -> Type {
        let condition_type = self.expressions.analyze(condition, ctx);
        if condition_type.is_bool() {
            condition_type
        } else if condition_type.is_error() {
            Type::error()
        } else {
            ctx.report(kind, condition);
            Type::error()
        }
    }

    fn analyze_return(
        &self,
        stmt: &Statement,
        value: Option<&Expression>,
        enclosing: FunctionContext<'_>,
        ctx: &mut AnalysisContext,
    ) -> Type {
        let expected = enclosing.return_type;
        match value {
            None if expected.is_void() => Type::void(),
            None => {
                ctx.report(DiagnosticKind::MissingReturnValue, stmt);
                Type::error()
            }
            Some(value) => {
                let value_type = self.expressions.analyze(value, ctx);
                if expected.is_void() {
                    debug!("value returned from void function '{}'", enclosing.name);
                    ctx.report(DiagnosticKind::ExtraneousReturnValue, value);
                    Type::error()
                } else if value_type.is_error() {
                    Type::error()
                } else if &value_type != expected {
                    ctx.report(DiagnosticKind::BadReturnValue, value);
                    Type::error()
                } else {
                    value_type
                }
            }
        }
    }

    /// `from_console dst`
    fn analyze_read(&self, dst: &Expression, ctx: &mut AnalysisContext) -> Type {
        let dst_type = self.expressions.analyze(dst, ctx);
        if dst_type.is_function() {
            ctx.report(DiagnosticKind::ReadIntoFunction, dst);
            Type::error()
        } else if dst_type.is_pointer() {
            ctx.report(DiagnosticKind::ReadIntoPointer, dst);
            Type::error()
        } else {
            dst_type
        }
    }

    /// `to_console src`; string values (`char*`) are the only printable
    /// pointers
    fn analyze_write(&self, src: &Expression, ctx: &mut AnalysisContext) -> Type {
        let src_type = self.expressions.analyze(src, ctx);
        if src_type.is_function() {
            ctx.report(DiagnosticKind::WriteFunction, src);
            Type::error()
        } else if src_type.is_pointer() && !src_type.is_char_pointer() {
            ctx.report(DiagnosticKind::WriteRawPointer, src);
            Type::error()
        } else if src_type.is_void() {
            ctx.report(DiagnosticKind::WriteVoid, src);
            Type::error()
        } else if src_type.is_error() {
            Type::error()
        } else {
            Type::void()
        }
    }
}
