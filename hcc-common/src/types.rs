//! Identifiers shared between compiler phases

/// Symbol identifier, assigned by name resolution
pub type SymbolId = u32;
