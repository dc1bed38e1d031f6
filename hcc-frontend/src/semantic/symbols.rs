//! Symbols produced by name resolution
//!
//! Type analysis only reads this table: each identifier's `SymbolId` maps to
//! the declared type of the declaration it was bound to.

use crate::types::Type;
use hcc_common::SymbolId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbol table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub data_type: Type,
}

/// Resolved symbols keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: BTreeMap<SymbolId, Symbol>,
    next_id: SymbolId,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Add a symbol with a fresh id
    pub fn add_symbol(&mut self, name: String, data_type: Type) -> SymbolId {
        let id = self.next_id;
        self.next_id += 1;
        self.symbols.insert(id, Symbol { id, name, data_type });
        id
    }

    /// Get symbol data by ID
    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    /// Declared type of a symbol
    pub fn type_of(&self, id: SymbolId) -> Option<&Type> {
        self.symbols.get(&id).map(|symbol| &symbol.data_type)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
