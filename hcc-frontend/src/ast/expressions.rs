//! Expression AST nodes for HoleyC
//! 
//! Identifiers arrive already bound to a symbol by name resolution.

use super::ops::{BinaryOp, UnaryOp};
use crate::ast::NodeId;
use hcc_common::{HasLocation, SourceLocation, SymbolId};
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub node_id: NodeId,
    pub kind: ExpressionKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Identifier reference
    Identifier {
        name: String,
        symbol_id: SymbolId,
    },
    
    IntLiteral(i64),
    
    CharLiteral(char),

    /// `true` / `false`
    BoolLiteral(bool),
    
    StringLiteral(String),
    
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// `target = value`
    Assign {
        target: Box<Expression>,
        value: Box<Expression>,
    },

    /// Pointer dereference
    Dereference(Box<Expression>),

    /// Address-of
    AddressOf(Box<Expression>),

    /// `base[offset]`
    Index {
        base: Box<Expression>,
        offset: Box<Expression>,
    },
    
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl HasLocation for Expression {
    fn location(&self) -> SourceLocation {
        self.location
    }
}
