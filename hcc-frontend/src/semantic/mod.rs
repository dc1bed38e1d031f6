//! Type Analysis for HoleyC
//!
//! Synthesizes a type for every node of a resolved program and reports
//! type errors. The pass is error tolerant: the whole tree is visited no
//! matter how many diagnostics are emitted, and `Error` types suppress
//! cascading reports.

pub mod context;
pub mod errors;
pub mod expressions;
pub mod node_types;
pub mod statements;
pub mod symbols;

use crate::ast::*;
use crate::types::Type;
use hcc_common::{CompilerError, Diagnostic};
use log::debug;
use serde::{Deserialize, Serialize};

pub use context::{AnalysisContext, FunctionContext};
pub use errors::ContractViolation;
pub use node_types::NodeTypeMap;
pub use statements::StatementAnalyzer;
pub use symbols::{Symbol, SymbolTable};

/// Output of name resolution: the program with every identifier bound to a
/// symbol, plus the table those bindings point into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameAnalysis {
    pub program: Program,
    pub symbols: SymbolTable,
}

impl NameAnalysis {
    pub fn new(program: Program, symbols: SymbolTable) -> Self {
        Self { program, symbols }
    }

    /// Load a resolved program from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CompilerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CompilerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Type analyzer for one resolved program
pub struct TypeAnalyzer<'a> {
    input: &'a NameAnalysis,
    statements: StatementAnalyzer<'a>,
    ctx: AnalysisContext,
}

impl<'a> TypeAnalyzer<'a> {
    pub fn new(input: &'a NameAnalysis) -> Self {
        Self {
            input,
            statements: StatementAnalyzer::new(&input.symbols),
            ctx: AnalysisContext::new(),
        }
    }

    /// Analyze the whole program and return everything the run produced
    pub fn run(mut self) -> TypeAnalysisReport {
        let input = self.input;
        let program = &input.program;
        debug!("type analysis: {} global declaration(s)", program.globals.len());

        for global in &program.globals {
            match global {
                Declaration::Variable(decl) => {
                    self.statements.analyze_var_decl(decl, &mut self.ctx);
                }
                Declaration::Function(func) => self.analyze_function(func),
            }
        }
        self.ctx.commit(program.node_id, Type::void());

        let (node_types, reporter, violations) = self.ctx.into_parts();
        debug!("type analysis finished: {}", reporter.summary());

        TypeAnalysisReport {
            succeeded: !reporter.has_errors(),
            node_types,
            diagnostics: reporter.into_diagnostics(),
            violations,
        }
    }

    fn analyze_function(&mut self, func: &FnDecl) {
        debug!("analyzing function '{}'", func.name);

        for formal in &func.formals {
            self.statements.analyze_var_decl(formal, &mut self.ctx);
        }

        let enclosing = FunctionContext::new(&func.name, &func.return_type);
        self.statements.analyze_block(&func.body, enclosing, &mut self.ctx);

        self.ctx.commit(func.node_id, func.signature());
    }
}

/// Everything a type analysis run produced, successful or not
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnalysisReport {
    pub node_types: NodeTypeMap,
    /// Diagnostics in emission order
    pub diagnostics: Vec<Diagnostic>,
    pub succeeded: bool,
    pub violations: Vec<ContractViolation>,
}

impl TypeAnalysisReport {
    /// Turn the report into a result that code generation can consume.
    ///
    /// User diagnostics take precedence over contract violations.
    pub fn into_result(self) -> Result<TypeAnalysis, CompilerError> {
        if !self.succeeded {
            return Err(CompilerError::TypeCheckFailed {
                diagnostics: self.diagnostics,
            });
        }
        if let Some(violation) = self.violations.into_iter().next() {
            return Err(violation.into());
        }
        Ok(TypeAnalysis {
            node_types: self.node_types,
        })
    }
}

/// A successful type analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAnalysis {
    node_types: NodeTypeMap,
}

impl TypeAnalysis {
    /// Run type analysis, failing with every diagnostic if any was reported
    pub fn build(input: &NameAnalysis) -> Result<TypeAnalysis, CompilerError> {
        TypeAnalyzer::new(input).run().into_result()
    }

    /// Type of an AST node
    pub fn node_type(&self, node: NodeId) -> Option<&Type> {
        self.node_types.get(node)
    }

    pub fn node_types(&self) -> &NodeTypeMap {
        &self.node_types
    }
}
