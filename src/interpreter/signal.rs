use std::fmt::Display;

use super::value::Value;

/// Outcome of executing one statement.
///
/// `Break` and `Continue` travel up to the nearest loop, `Return` to the
/// nearest function call. Everything else completes with `Normal`.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Normal,
    Break,
    Continue,
    Return(Value),
}

impl Signal {
    pub fn is_normal(&self) -> bool {
        *self == Signal::Normal
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Normal => write!(f, "normal completion"),
            Signal::Break => write!(f, "break"),
            Signal::Continue => write!(f, "continue"),
            Signal::Return(_) => write!(f, "return"),
        }
    }
}
