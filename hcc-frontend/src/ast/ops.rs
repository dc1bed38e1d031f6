//! Operator definitions for HoleyC
//! 
//! This module defines binary and unary operators used in expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div,
    
    // Logical
    And, Or,
    
    // Equality
    Equal, NotEqual,

    // Relational
    Less, LessEqual, Greater, GreaterEqual,
}

/// Rule family a binary operator is checked by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    Arithmetic,
    Relational,
    Logical,
    Equality,
}

impl BinaryOp {
    pub fn class(&self) -> OperatorClass {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                OperatorClass::Arithmetic
            }
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
                OperatorClass::Relational
            }
            BinaryOp::And | BinaryOp::Or => OperatorClass::Logical,
            BinaryOp::Equal | BinaryOp::NotEqual => OperatorClass::Equality,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        };
        write!(f, "{op_str}")
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classes() {
        assert_eq!(BinaryOp::Div.class(), OperatorClass::Arithmetic);
        assert_eq!(BinaryOp::GreaterEqual.class(), OperatorClass::Relational);
        assert_eq!(BinaryOp::Or.class(), OperatorClass::Logical);
        assert_eq!(BinaryOp::NotEqual.class(), OperatorClass::Equality);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", BinaryOp::LessEqual), "<=");
        assert_eq!(format!("{}", BinaryOp::And), "and");
        assert_eq!(format!("{}", UnaryOp::Not), "!");
    }
}
