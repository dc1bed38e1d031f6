//! HoleyC Compiler - Frontend
//!
//! This crate provides the type analysis pass of the HoleyC compiler:
//! - AST: resolved syntax tree definitions and a builder
//! - Types: the HoleyC type model
//! - Semantic analysis: type synthesis and type error reporting

pub mod ast;
pub mod semantic;
pub mod types;

pub use ast::{
    AstBuilder, BinaryOp, Declaration, Expression, ExpressionKind, FnDecl, NodeId,
    NodeIdGenerator, Program, Statement, StatementKind, UnaryOp, VarDecl,
};
pub use semantic::{
    NameAnalysis, NodeTypeMap, SymbolTable, TypeAnalysis, TypeAnalysisReport, TypeAnalyzer,
};
pub use types::{BasicType, FunctionType, Type};

use hcc_common::CompilerError;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Run type analysis on a resolved program serialized as JSON and return
    /// the full report
    pub fn analyze_json(json: &str) -> Result<TypeAnalysisReport, CompilerError> {
        let input = NameAnalysis::from_json(json)?;
        Ok(TypeAnalyzer::new(&input).run())
    }

    /// Type check a resolved program serialized as JSON
    pub fn check_json(json: &str) -> Result<TypeAnalysis, CompilerError> {
        let input = NameAnalysis::from_json(json)?;
        TypeAnalysis::build(&input)
    }
}
