//! HoleyC Compiler - Common Types and Utilities
//! 
//! This crate contains shared types, error definitions, and the diagnostic
//! sink used across the components of the HoleyC compiler.

pub mod diagnostics;
pub mod error;
pub mod source_loc;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, ErrorReporter};
pub use error::CompilerError;
pub use source_loc::{HasLocation, SourceLocation};
pub use types::*;
