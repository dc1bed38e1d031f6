//! Node-type map
//!
//! Associates every visited AST node with the type synthesized for it.
//! Entries are written once and never overwritten.

use crate::ast::NodeId;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeMap {
    types: BTreeMap<NodeId, Type>,
}

impl NodeTypeMap {
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Record the type of `node`. Returns false, leaving the existing entry
    /// in place, if the node already has one.
    pub fn record(&mut self, node: NodeId, ty: Type) -> bool {
        match self.types.entry(node) {
            Entry::Vacant(entry) => {
                entry.insert(ty);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, node: NodeId) -> Option<&Type> {
        self.types.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.types.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Entries in ascending node id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Type)> {
        self.types.iter().map(|(node, ty)| (*node, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut map = NodeTypeMap::new();
        assert!(map.is_empty());
        assert!(map.record(3, Type::int()));
        assert_eq!(map.get(3), Some(&Type::int()));
        assert!(map.contains(3));
        assert_eq!(map.get(4), None);
    }

    #[test]
    fn test_entries_are_never_overwritten() {
        let mut map = NodeTypeMap::new();
        assert!(map.record(1, Type::bool()));
        assert!(!map.record(1, Type::error()));
        assert_eq!(map.get(1), Some(&Type::bool()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let mut map = NodeTypeMap::new();
        map.record(7, Type::int());
        map.record(2, Type::char());
        let ids: Vec<_> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2, 7]);
    }
}
