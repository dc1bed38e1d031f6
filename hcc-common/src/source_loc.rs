//! Source location tracking for error reporting
//! 
//! Every AST node carries the position where it starts in the source file.
//! Diagnostics are reported against these positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<(u32, u32)> for SourceLocation {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Trait for types that have a source location
pub trait HasLocation {
    fn location(&self) -> SourceLocation;
}

impl HasLocation for SourceLocation {
    fn location(&self) -> SourceLocation {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::new(42, 10);
        assert_eq!(loc.line, 42);
        assert_eq!(loc.column, 10);
        assert_eq!(format!("{}", loc), "42:10");
    }

    #[test]
    fn test_location_from_tuple() {
        let loc: SourceLocation = (3, 7).into();
        assert_eq!(loc, SourceLocation::new(3, 7));
        assert_eq!(loc.location(), loc);
    }

    #[test]
    fn test_locations_order_by_line_then_column() {
        assert!(SourceLocation::new(1, 9) < SourceLocation::new(2, 1));
        assert!(SourceLocation::new(2, 1) < SourceLocation::new(2, 4));
    }
}
