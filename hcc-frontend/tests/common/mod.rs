//! Shared helpers for type analysis tests

#![allow(dead_code)]

use hcc_common::DiagnosticKind;
use hcc_frontend::{
    AstBuilder, Declaration, Expression, NameAnalysis, NodeId, Statement, Type,
    TypeAnalysisReport, TypeAnalyzer,
};

/// Wrap `body` in `void main() { ... }` and finish the program
pub fn in_main(b: AstBuilder, body: Vec<Statement>) -> NameAnalysis {
    in_function(b, "main", Type::void(), body)
}

/// Wrap `body` in a function named `name` with no formals
pub fn in_function(
    mut b: AstBuilder,
    name: &str,
    return_type: Type,
    body: Vec<Statement>,
) -> NameAnalysis {
    let func = b.declare_function(name, vec![], return_type);
    let decl = b.fn_decl(func, vec![], body, (1, 1));
    b.finish(vec![Declaration::Function(decl)])
}

pub fn run(input: &NameAnalysis) -> TypeAnalysisReport {
    TypeAnalyzer::new(input).run()
}

/// Analyze `expr` as the only statement of `main`, returning its node id and
/// the report
pub fn check_expression(mut b: AstBuilder, expr: Expression) -> (NodeId, TypeAnalysisReport) {
    let id = expr.node_id;
    let stmt = b.call_stmt(expr, (99, 1));
    let input = in_main(b, vec![stmt]);
    (id, run(&input))
}

/// Diagnostics as `(kind, line, column)` in emission order
pub fn reported(report: &TypeAnalysisReport) -> Vec<(DiagnosticKind, u32, u32)> {
    report
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.location.line, d.location.column))
        .collect()
}

pub fn type_of(report: &TypeAnalysisReport, node: NodeId) -> Option<Type> {
    report.node_types.get(node).cloned()
}
