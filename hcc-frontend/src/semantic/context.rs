//! Run-scoped analysis state
//!
//! `AnalysisContext` owns everything one pass mutates: the node-type map,
//! the error reporter, and any contract violations. `FunctionContext` is the
//! inherited attribute passed down into statement analysis.

use crate::ast::NodeId;
use crate::semantic::errors::ContractViolation;
use crate::semantic::node_types::NodeTypeMap;
use crate::types::Type;
use hcc_common::{DiagnosticKind, ErrorReporter, HasLocation};
use log::{trace, warn};

/// Mutable state of one type analysis run
#[derive(Debug, Default)]
pub struct AnalysisContext {
    node_types: NodeTypeMap,
    reporter: ErrorReporter,
    violations: Vec<ContractViolation>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the type of `node` and hand it back to the caller
    pub fn commit(&mut self, node: NodeId, ty: Type) -> Type {
        trace!("node {node}: {ty}");
        if !self.node_types.record(node, ty.clone()) {
            warn!("node {node} already has a type, keeping the first one");
            self.violations.push(ContractViolation::DuplicateNodeId { node_id: node });
        }
        ty
    }

    /// Report a diagnostic at the position of `at`
    pub fn report(&mut self, kind: DiagnosticKind, at: &impl HasLocation) {
        trace!("{}: {kind}", at.location());
        self.reporter.report(kind, at);
    }

    pub fn violation(&mut self, violation: ContractViolation) {
        warn!("{violation}");
        self.violations.push(violation);
    }

    pub fn node_types(&self) -> &NodeTypeMap {
        &self.node_types
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    pub fn into_parts(self) -> (NodeTypeMap, ErrorReporter, Vec<ContractViolation>) {
        (self.node_types, self.reporter, self.violations)
    }
}

/// Inherited context for statements inside a function body
#[derive(Debug, Clone, Copy)]
pub struct FunctionContext<'a> {
    pub name: &'a str,
    pub return_type: &'a Type,
}

impl<'a> FunctionContext<'a> {
    pub fn new(name: &'a str, return_type: &'a Type) -> Self {
        Self { name, return_type }
    }
}
