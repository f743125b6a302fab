use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use super::ast::Expr;

lazy_static! {
    static ref FLOAT_LITERAL: Regex = Regex::new(r"^(\d+\.\d*|\.\d+)$").unwrap();
    static ref INT_LITERAL: Regex = Regex::new(r"^\d+$").unwrap();
    static ref STRING_LITERAL: Regex = Regex::new(r#"^"([^\\\n]|(\\.))*?"$"#).unwrap();
}

// LITERALS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    String,
}

/// Literal Expression
/// Represents a constant in the AST. The token text is kept as written,
/// string literals include their surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub text: String,
    pub line: u32,
}

impl LiteralExpr {
    pub fn new(kind: LiteralKind, text: impl Into<String>, line: u32) -> Self {
        LiteralExpr {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Classifies raw token text the way a front end would.
    ///
    /// Returns `None` when the text is not a constant.
    pub fn from_token(text: &str, line: u32) -> Option<Self> {
        let kind = if FLOAT_LITERAL.is_match(text) {
            LiteralKind::Float
        } else if INT_LITERAL.is_match(text) {
            LiteralKind::Int
        } else if STRING_LITERAL.is_match(text) {
            LiteralKind::String
        } else {
            return None;
        };

        Some(LiteralExpr::new(kind, text, line))
    }
}

/// Symbol Expression
/// Represents a variable read in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub line: u32,
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitOr,
    BitAnd,
    BitXor,
    And,
    Or,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 18] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Mod,
        BinaryOperator::Shl,
        BinaryOperator::Shr,
        BinaryOperator::BitOr,
        BinaryOperator::BitAnd,
        BinaryOperator::BitXor,
        BinaryOperator::And,
        BinaryOperator::Or,
        BinaryOperator::Equals,
        BinaryOperator::NotEquals,
        BinaryOperator::Less,
        BinaryOperator::Greater,
        BinaryOperator::LessEquals,
        BinaryOperator::GreaterEquals,
    ];

    /// The operator as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitXor => "^",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BinaryOperator::ALL
            .iter()
            .find(|operator| operator.symbol() == symbol)
            .copied()
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Equals
                | BinaryOperator::NotEquals
                | BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::LessEquals
                | BinaryOperator::GreaterEquals
        )
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

/// Call Expression
/// Calls a function by name. Arguments are positional.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub line: u32,
}
