//! Type analysis diagnostics
//! 
//! This module defines the diagnostic categories reported by type analysis
//! and the `ErrorReporter` that collects them in emission order.

use crate::source_loc::{HasLocation, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic categories, one per typing rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    InvalidPointerOperator,
    BadArithmeticOperand,
    BadRelationalOperand,
    BadLogicalOperand,
    BadEqualityOperands,
    InvalidAssignmentOperator,
    BadAssignmentOperand,
    BadIfCondition,
    BadWhileCondition,
    MissingReturnValue,
    ExtraneousReturnValue,
    BadReturnValue,
    DerefFunction,
    BadPointerBase,
    BadIndex,
    BadCallee,
    BadArgumentCount,
    BadArgumentMatch,
    ReadIntoFunction,
    ReadIntoPointer,
    WriteFunction,
    WriteRawPointer,
    WriteVoid,
}

impl DiagnosticKind {
    /// Message shown to the user for this category
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidPointerOperator => "Invalid operator for pointer operands",
            DiagnosticKind::BadArithmeticOperand => "Arithmetic operator applied to invalid operand",
            DiagnosticKind::BadRelationalOperand => "Relational operator applied to non-numeric operand",
            DiagnosticKind::BadLogicalOperand => "Logical operator applied to non-bool operand",
            DiagnosticKind::BadEqualityOperands => "Invalid equality operand",
            DiagnosticKind::InvalidAssignmentOperator => "Invalid assignment operation",
            DiagnosticKind::BadAssignmentOperand => "Invalid assignment operand",
            DiagnosticKind::BadIfCondition => "Non-bool expression used as an if condition",
            DiagnosticKind::BadWhileCondition => "Non-bool expression used as a while condition",
            DiagnosticKind::MissingReturnValue => "Missing return value",
            DiagnosticKind::ExtraneousReturnValue => "Return with a value in void function",
            DiagnosticKind::BadReturnValue => "Bad return value",
            DiagnosticKind::DerefFunction => "Invalid operand for dereference",
            DiagnosticKind::BadPointerBase => "Non-pointer base used in index expression",
            DiagnosticKind::BadIndex => "Non-integer index used in index expression",
            DiagnosticKind::BadCallee => "Attempt to call a non-function",
            DiagnosticKind::BadArgumentCount => "Function call with wrong number of args",
            DiagnosticKind::BadArgumentMatch => "Type of actual does not match type of formal",
            DiagnosticKind::ReadIntoFunction => "Attempt to assign user input to function",
            DiagnosticKind::ReadIntoPointer => "Attempt to read a raw pointer",
            DiagnosticKind::WriteFunction => "Attempt to output a function",
            DiagnosticKind::WriteRawPointer => "Attempt to output a raw pointer",
            DiagnosticKind::WriteVoid => "Attempt to output void",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// A diagnostic message with its source position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Error reporter for collecting diagnostics during one analysis run.
///
/// The log is append-only. The failure flag latches on the first report and
/// is never cleared.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    failed: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            failed: false,
        }
    }

    /// Report a diagnostic at the position of `at`
    pub fn report(&mut self, kind: DiagnosticKind, at: &impl HasLocation) {
        self.diagnostics.push(Diagnostic::new(kind, at.location()));
        self.failed = true;
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.failed
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match self.diagnostics.len() {
            0 => "No errors".to_string(),
            1 => "1 error".to_string(),
            n => format!("{} errors", n),
        }
    }
}
