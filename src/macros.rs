//! Utility macros for building syntax trees.
//!
//! The crate has no parser of its own, so callers (and the test suites) assemble
//! trees by hand. These macros keep that readable:
//!
//! - `MK_TYPE!` - Resolves `int` / `float` / `string` to a `Type`
//! - `MK_INT!`, `MK_FLOAT!`, `MK_STRING!` - Literal expressions, keeping the token text
//! - `MK_VAR!` - A variable read
//! - `MK_BINARY!` - A binary expression
//! - `MK_CALL!` - A function call expression
//! - `MK_DECL!`, `MK_ASSIGN!`, `MK_PRINT!`, `MK_BLOCK!` - Common statements

#[macro_export]
macro_rules! MK_TYPE {
    (int) => {
        $crate::ast::types::Type::Int
    };
    (float) => {
        $crate::ast::types::Type::Float
    };
    (string) => {
        $crate::ast::types::Type::String
    };
}

/// Creates an integer literal expression.
///
/// # Example
///
/// ```ignore
/// let expr = MK_INT!(42; 3); // `42` on line 3
/// ```
#[macro_export]
macro_rules! MK_INT {
    ($value:literal; $line:expr) => {
        $crate::ast::ast::Expr::Literal($crate::ast::expressions::LiteralExpr::new(
            $crate::ast::expressions::LiteralKind::Int,
            stringify!($value),
            $line,
        ))
    };
}

#[macro_export]
macro_rules! MK_FLOAT {
    ($value:literal; $line:expr) => {
        $crate::ast::ast::Expr::Literal($crate::ast::expressions::LiteralExpr::new(
            $crate::ast::expressions::LiteralKind::Float,
            stringify!($value),
            $line,
        ))
    };
}

/// Creates a string literal expression. The stored text keeps its quotes,
/// exactly as a scanner would hand it over.
#[macro_export]
macro_rules! MK_STRING {
    ($value:literal; $line:expr) => {
        $crate::ast::ast::Expr::Literal($crate::ast::expressions::LiteralExpr::new(
            $crate::ast::expressions::LiteralKind::String,
            stringify!($value),
            $line,
        ))
    };
}

#[macro_export]
macro_rules! MK_VAR {
    ($name:ident; $line:expr) => {
        $crate::ast::ast::Expr::Symbol($crate::ast::expressions::SymbolExpr {
            name: String::from(stringify!($name)),
            line: $line,
        })
    };
}

/// Creates a binary expression from a `BinaryOperator` variant name.
///
/// # Example
///
/// ```ignore
/// let sum = MK_BINARY!(Add, MK_VAR!(a; 1), MK_INT!(1; 1); 1);
/// ```
#[macro_export]
macro_rules! MK_BINARY {
    ($op:ident, $left:expr, $right:expr; $line:expr) => {
        $crate::ast::ast::Expr::Binary($crate::ast::expressions::BinaryExpr {
            operator: $crate::ast::expressions::BinaryOperator::$op,
            left: Box::new($left),
            right: Box::new($right),
            line: $line,
        })
    };
}

#[macro_export]
macro_rules! MK_CALL {
    ($name:ident($($arg:expr),* $(,)?); $line:expr) => {
        $crate::ast::ast::Expr::Call($crate::ast::expressions::CallExpr {
            name: String::from(stringify!($name)),
            arguments: vec![$($arg),*],
            line: $line,
        })
    };
}

/// Creates a declaration statement.
///
/// # Example
///
/// ```ignore
/// let decl = MK_DECL!(int; a = MK_INT!(1; 1), b = MK_INT!(2; 1); 1);
/// ```
#[macro_export]
macro_rules! MK_DECL {
    ($ty:ident; $($name:ident = $value:expr),+ ; $line:expr) => {
        $crate::ast::ast::Stmt::VarDecl($crate::ast::statements::VarDeclStmt {
            var_type: $crate::MK_TYPE!($ty),
            inits: vec![$($crate::ast::statements::Init {
                name: String::from(stringify!($name)),
                value: $value,
                line: $line,
            }),+],
            line: $line,
        })
    };
}

#[macro_export]
macro_rules! MK_ASSIGN {
    ($name:ident = $value:expr; $line:expr) => {
        $crate::ast::ast::Stmt::Assignment($crate::ast::statements::AssignmentStmt {
            name: String::from(stringify!($name)),
            value: $value,
            line: $line,
        })
    };
}

#[macro_export]
macro_rules! MK_PRINT {
    ($value:expr; $line:expr) => {
        $crate::ast::ast::Stmt::Print($crate::ast::statements::PrintStmt {
            value: $value,
            line: $line,
        })
    };
}

#[macro_export]
macro_rules! MK_BLOCK {
    ($line:expr; $($stmt:expr),* $(,)?) => {
        $crate::ast::ast::Stmt::Block($crate::ast::statements::BlockStmt {
            body: vec![$($stmt),*],
            line: $line,
        })
    };
}
