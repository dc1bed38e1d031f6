//! Error handling for the HoleyC compiler
//! 
//! This module defines the error type returned by the fallible entry points
//! of the compiler crates.

use crate::diagnostics::Diagnostic;
use thiserror::Error;

/// Main compiler error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Invalid input: {message}")]
    InputError { message: String },

    #[error("Type check failed with {} error(s)", .diagnostics.len())]
    TypeCheckFailed { diagnostics: Vec<Diagnostic> },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create an internal error
    pub fn internal_error(message: String) -> Self {
        CompilerError::InternalError { message }
    }

    /// Diagnostics carried by a failed type check, empty for other errors
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CompilerError::TypeCheckFailed { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Convert from serde_json::Error (malformed resolved-program input)
impl From<serde_json::Error> for CompilerError {
    fn from(err: serde_json::Error) -> Self {
        CompilerError::InputError {
            message: err.to_string(),
        }
    }
}
