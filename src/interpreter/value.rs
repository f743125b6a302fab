use std::fmt::Display;

use crate::{
    ast::{
        expressions::{LiteralExpr, LiteralKind},
        types::Type,
    },
    errors::errors::RuntimeErrorImpl,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Decodes a literal from its token text. String literals lose their
    /// surrounding quotes.
    pub fn from_literal(literal: &LiteralExpr) -> Result<Value, RuntimeErrorImpl> {
        let invalid = || RuntimeErrorImpl::InvalidLiteral {
            text: literal.text.clone(),
        };

        match literal.kind {
            LiteralKind::Int => literal.text.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
            LiteralKind::Float => literal.text.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
            LiteralKind::String => literal
                .text
                .strip_prefix('"')
                .and_then(|text| text.strip_suffix('"'))
                .map(|text| Value::String(text.to_string()))
                .ok_or_else(invalid),
        }
    }

    pub fn get_type(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::String(_) => Type::String,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(value) => *value != 0,
            Value::Float(value) => *value != 0.0,
            Value::String(value) => !value.is_empty(),
        }
    }

    /// Converts a numeric value to the representation of `target`.
    ///
    /// Ints widen into floats, floats truncate toward zero into ints. Any
    /// other combination is returned unchanged.
    pub fn coerce_to(self, target: Type) -> Value {
        match (self, target) {
            (Value::Int(value), Type::Float) => Value::Float(value as f64),
            (Value::Float(value), Type::Int) => Value::Int(value as i64),
            (value, _) => value,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) if value.is_finite() && value.fract() == 0.0 => write!(f, "{:.1}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
        }
    }
}
