//! Type annotations as written in source.
//!
//! Annotations are kept purely syntactic: a name is never resolved to a
//! definition here.

use std::fmt::Display;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Declared type of anything written without an annotation.
    Any,
    Symbol(SymbolType),
    Array(ArrayType),
}

/// A named type reference, e.g. `Int`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
    pub position: Position,
}

/// `T[]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Any => write!(f, "any"),
            Type::Symbol(symbol) => write!(f, "{}", symbol.name),
            Type::Array(array) => write!(f, "{}[]", array.underlying),
        }
    }
}
