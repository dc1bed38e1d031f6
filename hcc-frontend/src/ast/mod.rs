//! Abstract Syntax Tree definitions for HoleyC
//! 
//! This module defines the AST nodes handed to type analysis by name
//! resolution. Every node carries a `NodeId` that keys the node-type map.

pub mod builder;
pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use builder::AstBuilder;
pub use ops::{BinaryOp, OperatorClass, UnaryOp};
pub use expressions::{Expression, ExpressionKind};
pub use statements::{
    Statement, StatementKind, VarDecl, FnDecl, Declaration, Program
};

/// Unique identifier for AST nodes
pub type NodeId = u32;

/// Node ID generator for AST nodes
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next_id: NodeId,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }
    
    pub fn next(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
