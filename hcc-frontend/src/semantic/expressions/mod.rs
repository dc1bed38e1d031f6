//! Expression type analysis
//!
//! This module synthesizes types for expressions bottom-up: children are
//! analyzed and committed to the node-type map before the parent's rule runs.

mod analyzer;
mod assignment;
mod binary;
mod calls;
mod pointer;
mod unary;

// Re-export the main analyzer
pub use analyzer::ExpressionAnalyzer;
pub use unary::UnaryOperationAnalyzer;

use crate::ast::Expression;
use crate::types::Type;
use hcc_common::{HasLocation, SourceLocation};

/// An analyzed child expression together with its synthesized type
#[derive(Debug, Clone, Copy)]
pub struct Operand<'e> {
    pub expr: &'e Expression,
    pub ty: &'e Type,
}

impl<'e> Operand<'e> {
    pub fn new(expr: &'e Expression, ty: &'e Type) -> Self {
        Self { expr, ty }
    }
}

impl HasLocation for Operand<'_> {
    fn location(&self) -> SourceLocation {
        self.expr.location
    }
}
