//! Contract violations detected during type analysis
//! 
//! These are not user diagnostics: they mean the resolved program handed to
//! the pass broke the name-resolution contract.

use crate::ast::NodeId;
use hcc_common::{CompilerError, SourceLocation, SymbolId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractViolation {
    #[error("identifier '{name}' at {location} is bound to unknown symbol {symbol_id}")]
    UnresolvedSymbol {
        name: String,
        symbol_id: SymbolId,
        location: SourceLocation,
    },

    #[error("node {node_id} was typed more than once")]
    DuplicateNodeId { node_id: NodeId },
}

impl From<ContractViolation> for CompilerError {
    fn from(err: ContractViolation) -> Self {
        CompilerError::internal_error(err.to_string())
    }
}
