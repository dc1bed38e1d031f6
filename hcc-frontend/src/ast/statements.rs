//! Statement and declaration AST nodes for HoleyC
//! 
//! This module defines statement nodes, variable and function declarations,
//! and the program root.

use crate::types::Type;
use super::expressions::Expression;
use crate::ast::NodeId;
use hcc_common::{HasLocation, SourceLocation, SymbolId};
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub node_id: NodeId,
    pub kind: StatementKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Local variable declaration
    VarDecl(VarDecl),

    /// Assignment statement, wraps an `ExpressionKind::Assign`
    Assign(Expression),

    /// `lval++`
    PostIncrement(Expression),

    /// `lval--`
    PostDecrement(Expression),

    If {
        condition: Expression,
        body: Vec<Statement>,
    },

    IfElse {
        condition: Expression,
        then_body: Vec<Statement>,
        else_body: Vec<Statement>,
    },

    While {
        condition: Expression,
        body: Vec<Statement>,
    },

    Return(Option<Expression>),

    /// Call statement, wraps an `ExpressionKind::Call`
    Call(Expression),

    /// `from_console dst`
    Read(Expression),

    /// `to_console src`
    Write(Expression),
}

/// Variable declaration (global, local, or formal parameter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub node_id: NodeId,
    pub name: String,
    pub decl_type: Type,
    pub symbol_id: SymbolId,
    pub location: SourceLocation,
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnDecl {
    pub node_id: NodeId,
    pub name: String,
    pub formals: Vec<VarDecl>,
    pub return_type: Type,
    pub body: Vec<Statement>,
    pub symbol_id: SymbolId,
    pub location: SourceLocation,
}

impl FnDecl {
    /// The function's signature type
    pub fn signature(&self) -> Type {
        Type::function(
            self.formals.iter().map(|formal| formal.decl_type.clone()).collect(),
            self.return_type.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    Variable(VarDecl),
    Function(FnDecl),
}

/// Program root: the ordered list of global declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub node_id: NodeId,
    pub globals: Vec<Declaration>,
    pub location: SourceLocation,
}

impl HasLocation for Statement {
    fn location(&self) -> SourceLocation {
        self.location
    }
}

impl HasLocation for VarDecl {
    fn location(&self) -> SourceLocation {
        self.location
    }
}

impl HasLocation for FnDecl {
    fn location(&self) -> SourceLocation {
        self.location
    }
}
