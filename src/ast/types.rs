//! Type system definitions for the AST.
//!
//! The language has three value types (`int`, `float`, `string`). The type
//! checker adds a fourth, `Unknown`, for expressions whose type could not be
//! determined because an error was already reported for them. Any check that
//! sees `Unknown` on either side stays silent so one mistake is reported once.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref BUILT_IN_TYPES: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert("int", Type::Int);
        map.insert("float", Type::Float);
        map.insert("string", Type::String);
        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    String,
    Unknown,
}

impl Type {
    /// Resolves a type name as written in source.
    pub fn from_name(name: &str) -> Option<Type> {
        BUILT_IN_TYPES.get(name).copied()
    }

    pub fn is_unknown(&self) -> bool {
        *self == Type::Unknown
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "string"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}
