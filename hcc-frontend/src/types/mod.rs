//! Type system definitions for HoleyC
//!
//! Types are plain values compared structurally. They are built through the
//! constructors on `Type` (`basic`, `pointer`, `function`, `error`), which
//! keep every value in canonical form so that logically equal types are
//! always `==`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Basic scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    Int,
    Char,
    Bool,
    Void,
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasicType::Int => write!(f, "int"),
            BasicType::Char => write!(f, "char"),
            BasicType::Bool => write!(f, "bool"),
            BasicType::Void => write!(f, "void"),
        }
    }
}

/// Function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    pub formals: Vec<Type>,
    pub return_type: Box<Type>,
}

/// HoleyC type
///
/// `Pointer::base` is never itself a pointer and `depth` is at least 1;
/// `Type::pointer` folds nested pointers to keep that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TypeRepr")]
pub enum Type {
    Basic(BasicType),

    Pointer {
        base: Box<Type>,
        depth: u32,
    },

    Function(FunctionType),

    /// Result of a failed rule
    Error,
}

impl Type {
    pub fn basic(kind: BasicType) -> Type {
        Type::Basic(kind)
    }

    pub fn int() -> Type {
        Type::Basic(BasicType::Int)
    }

    pub fn char() -> Type {
        Type::Basic(BasicType::Char)
    }

    pub fn bool() -> Type {
        Type::Basic(BasicType::Bool)
    }

    pub fn void() -> Type {
        Type::Basic(BasicType::Void)
    }

    pub fn error() -> Type {
        Type::Error
    }

    /// Add `extra_depth` levels of indirection to `base`; depth saturates at
    /// `u32::MAX`
    pub fn pointer(base: Type, extra_depth: u32) -> Type {
        match base {
            Type::Pointer { base, depth } if extra_depth > 0 => Type::Pointer {
                base,
                depth: depth.saturating_add(extra_depth),
            },
            other => Self::checked_pointer(other, extra_depth).unwrap_or(Type::Error),
        }
    }

    /// Like `pointer`, but `None` when the folded depth overflows
    pub fn checked_pointer(base: Type, extra_depth: u32) -> Option<Type> {
        if extra_depth == 0 {
            return Some(base);
        }
        match base {
            Type::Error => Some(Type::Error),
            Type::Pointer { base, depth } => Some(Type::Pointer {
                base,
                depth: depth.checked_add(extra_depth)?,
            }),
            other => Some(Type::Pointer {
                base: Box::new(other),
                depth: extra_depth,
            }),
        }
    }

    pub fn function(formals: Vec<Type>, return_type: Type) -> Type {
        Type::Function(FunctionType {
            formals,
            return_type: Box::new(return_type),
        })
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Basic(BasicType::Int))
    }

    pub fn is_char(&self) -> bool {
        matches!(self, Type::Basic(BasicType::Char))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Basic(BasicType::Bool))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Basic(BasicType::Void))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer { .. })
    }

    /// The type of a string literal, `char*`
    pub fn is_char_pointer(&self) -> bool {
        match self {
            Type::Pointer { base, depth } => *depth == 1 && base.is_char(),
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        self.as_function().is_some()
    }

    /// Whether a variable may be declared with (or an assignment may
    /// produce) this type
    pub fn is_valid_var_type(&self) -> bool {
        match self {
            Type::Basic(BasicType::Void) | Type::Function(_) | Type::Error => false,
            Type::Basic(_) | Type::Pointer { .. } => true,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(kind) => write!(f, "{kind}"),
            Type::Pointer { base, depth } => {
                write!(f, "{base}")?;
                for _ in 0..*depth {
                    write!(f, "*")?;
                }
                Ok(())
            }
            Type::Function(FunctionType { formals, return_type }) => {
                write!(f, "(")?;
                for (i, formal) in formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{formal}")?;
                }
                write!(f, ")->{return_type}")
            }
            Type::Error => write!(f, "ERROR"),
        }
    }
}

/// Wire shape of `Type`; deserialized values go through the canonicalizing
/// constructors.
#[derive(Deserialize)]
enum TypeRepr {
    Basic(BasicType),
    Pointer { base: Box<Type>, depth: u32 },
    Function(FunctionType),
    Error,
}

impl TryFrom<TypeRepr> for Type {
    type Error = String;

    fn try_from(repr: TypeRepr) -> Result<Self, String> {
        match repr {
            TypeRepr::Basic(kind) => Ok(Type::basic(kind)),
            TypeRepr::Pointer { base, depth } => Type::checked_pointer(*base, depth)
                .ok_or_else(|| format!("pointer depth overflows after adding {depth} level(s)")),
            TypeRepr::Function(FunctionType { formals, return_type }) => {
                Ok(Type::function(formals, *return_type))
            }
            TypeRepr::Error => Ok(Type::error()),
        }
    }
}
