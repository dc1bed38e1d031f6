//! AST Builder
//!
//! Constructs resolved programs without a parser: declares symbols, hands
//! out fresh node ids and binds identifiers as it builds nodes.

use crate::ast::*;
use crate::semantic::{NameAnalysis, SymbolTable};
use crate::types::Type;
use hcc_common::{SourceLocation, SymbolId};

/// Builder for resolved HoleyC programs
#[derive(Debug, Default)]
pub struct AstBuilder {
    ids: NodeIdGenerator,
    symbols: SymbolTable,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self {
            ids: NodeIdGenerator::new(),
            symbols: SymbolTable::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Declare a variable symbol
    pub fn declare(&mut self, name: &str, ty: Type) -> SymbolId {
        self.symbols.add_symbol(name.to_string(), ty)
    }

    /// Declare a function symbol
    pub fn declare_function(
        &mut self,
        name: &str,
        formals: Vec<Type>,
        return_type: Type,
    ) -> SymbolId {
        self.symbols.add_symbol(name.to_string(), Type::function(formals, return_type))
    }

    fn name_of(&self, symbol: SymbolId) -> String {
        self.symbols
            .get_symbol(symbol)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    fn expr(&mut self, kind: ExpressionKind, location: impl Into<SourceLocation>) -> Expression {
        Expression {
            node_id: self.ids.next(),
            kind,
            location: location.into(),
        }
    }

    fn stmt(&mut self, kind: StatementKind, location: impl Into<SourceLocation>) -> Statement {
        Statement {
            node_id: self.ids.next(),
            kind,
            location: location.into(),
        }
    }

    // Declarations

    pub fn var_decl(&mut self, symbol: SymbolId, location: impl Into<SourceLocation>) -> VarDecl {
        VarDecl {
            node_id: self.ids.next(),
            name: self.name_of(symbol),
            decl_type: self.symbols.type_of(symbol).cloned().unwrap_or_else(Type::error),
            symbol_id: symbol,
            location: location.into(),
        }
    }

    /// Function declaration; the return type comes from the declared
    /// signature of `symbol`
    pub fn fn_decl(
        &mut self,
        symbol: SymbolId,
        formals: Vec<VarDecl>,
        body: Vec<Statement>,
        location: impl Into<SourceLocation>,
    ) -> FnDecl {
        let return_type = self
            .symbols
            .type_of(symbol)
            .and_then(Type::as_function)
            .map(|f| (*f.return_type).clone())
            .unwrap_or_else(Type::void);

        FnDecl {
            node_id: self.ids.next(),
            name: self.name_of(symbol),
            formals,
            return_type,
            body,
            symbol_id: symbol,
            location: location.into(),
        }
    }

    // Expressions

    pub fn id(&mut self, symbol: SymbolId, location: impl Into<SourceLocation>) -> Expression {
        let name = self.name_of(symbol);
        self.expr(ExpressionKind::Identifier { name, symbol_id: symbol }, location)
    }

    pub fn int(&mut self, value: i64, location: impl Into<SourceLocation>) -> Expression {
        self.expr(ExpressionKind::IntLiteral(value), location)
    }

    pub fn char(&mut self, value: char, location: impl Into<SourceLocation>) -> Expression {
        self.expr(ExpressionKind::CharLiteral(value), location)
    }

    pub fn bool(&mut self, value: bool, location: impl Into<SourceLocation>) -> Expression {
        self.expr(ExpressionKind::BoolLiteral(value), location)
    }

    pub fn string(&mut self, value: &str, location: impl Into<SourceLocation>) -> Expression {
        self.expr(ExpressionKind::StringLiteral(value.to_string()), location)
    }

    pub fn binary(
        &mut self,
        op: BinaryOp,
        left: Expression,
        right: Expression,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(
            ExpressionKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            location,
        )
    }

    pub fn unary(
        &mut self,
        op: UnaryOp,
        operand: Expression,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(ExpressionKind::Unary { op, operand: Box::new(operand) }, location)
    }

    pub fn assign(
        &mut self,
        target: Expression,
        value: Expression,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(
            ExpressionKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            location,
        )
    }

    pub fn deref(
        &mut self,
        operand: Expression,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(ExpressionKind::Dereference(Box::new(operand)), location)
    }

    pub fn addr(&mut self, operand: Expression, location: impl Into<SourceLocation>) -> Expression {
        self.expr(ExpressionKind::AddressOf(Box::new(operand)), location)
    }

    pub fn index(
        &mut self,
        base: Expression,
        offset: Expression,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(
            ExpressionKind::Index {
                base: Box::new(base),
                offset: Box::new(offset),
            },
            location,
        )
    }

    pub fn call(
        &mut self,
        callee: Expression,
        arguments: Vec<Expression>,
        location: impl Into<SourceLocation>,
    ) -> Expression {
        self.expr(
            ExpressionKind::Call {
                callee: Box::new(callee),
                arguments,
            },
            location,
        )
    }

    // Statements

    /// Local variable declaration statement
    pub fn local(&mut self, decl: VarDecl) -> Statement {
        let location = decl.location;
        self.stmt(StatementKind::VarDecl(decl), location)
    }

    pub fn assign_stmt(
        &mut self,
        assign: Expression,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(StatementKind::Assign(assign), location)
    }

    pub fn post_inc(&mut self, lval: Expression, location: impl Into<SourceLocation>) -> Statement {
        self.stmt(StatementKind::PostIncrement(lval), location)
    }

    pub fn post_dec(&mut self, lval: Expression, location: impl Into<SourceLocation>) -> Statement {
        self.stmt(StatementKind::PostDecrement(lval), location)
    }

    pub fn if_then(
        &mut self,
        condition: Expression,
        body: Vec<Statement>,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(StatementKind::If { condition, body }, location)
    }

    pub fn if_else(
        &mut self,
        condition: Expression,
        then_body: Vec<Statement>,
        else_body: Vec<Statement>,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(
            StatementKind::IfElse {
                condition,
                then_body,
                else_body,
            },
            location,
        )
    }

    pub fn while_loop(
        &mut self,
        condition: Expression,
        body: Vec<Statement>,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(StatementKind::While { condition, body }, location)
    }

    pub fn return_void(&mut self, location: impl Into<SourceLocation>) -> Statement {
        self.stmt(StatementKind::Return(None), location)
    }

    pub fn return_value(
        &mut self,
        value: Expression,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(StatementKind::Return(Some(value)), location)
    }

    pub fn call_stmt(
        &mut self,
        call: Expression,
        location: impl Into<SourceLocation>,
    ) -> Statement {
        self.stmt(StatementKind::Call(call), location)
    }

    /// `from_console dst`
    pub fn read(&mut self, dst: Expression, location: impl Into<SourceLocation>) -> Statement {
        self.stmt(StatementKind::Read(dst), location)
    }

    /// `to_console src`
    pub fn write(&mut self, src: Expression, location: impl Into<SourceLocation>) -> Statement {
        self.stmt(StatementKind::Write(src), location)
    }

    /// Wrap the globals in a program node and hand over the symbol table
    pub fn finish(mut self, globals: Vec<Declaration>) -> NameAnalysis {
        let program = Program {
            node_id: self.ids.next(),
            globals,
            location: SourceLocation::new(1, 1),
        };
        NameAnalysis::new(program, self.symbols)
    }
}
