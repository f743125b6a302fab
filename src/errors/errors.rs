use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// A message emitted by the type checker.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    internal_error: DiagnosticImpl,
    position: Position,
}

impl Diagnostic {
    pub fn new(diagnostic_impl: DiagnosticImpl, position: Position) -> Self {
        Diagnostic {
            internal_error: diagnostic_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_kind(&self) -> &DiagnosticImpl {
        &self.internal_error
    }

    pub fn get_severity(&self) -> Severity {
        match &self.internal_error {
            DiagnosticImpl::PrecisionLoss { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.get_severity() == Severity::Error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            DiagnosticImpl::IllegalOperation { .. } => "IllegalOperationError",
            DiagnosticImpl::TypeMismatch { .. } => "TypeMismatchError",
            DiagnosticImpl::PrecisionLoss { .. } => "PrecisionLossWarning",
            DiagnosticImpl::DuplicateDeclaration { .. } => "DuplicateDeclarationError",
            DiagnosticImpl::FunctionNameShadowed { .. } => "FunctionNameShadowedError",
            DiagnosticImpl::UndeclaredName { .. } => "UndeclaredNameError",
            DiagnosticImpl::FunctionUsedAsVariable { .. } => "FunctionUsedAsVariableError",
            DiagnosticImpl::UndefinedFunction { .. } => "UndefinedFunctionError",
            DiagnosticImpl::NotAFunction { .. } => "NotAFunctionError",
            DiagnosticImpl::Arity { .. } => "ArityError",
            DiagnosticImpl::ArgumentType { .. } => "ArgumentTypeError",
            DiagnosticImpl::ReturnOutsideFunction => "ReturnOutsideFunctionError",
            DiagnosticImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatchError",
            DiagnosticImpl::MissingReturn { .. } => "MissingReturnError",
            DiagnosticImpl::BreakOutsideLoop => "BreakOutsideLoopError",
            DiagnosticImpl::ContinueOutsideLoop => "ContinueOutsideLoopError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            DiagnosticImpl::IllegalOperation { .. } => ErrorTip::None,
            DiagnosticImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Cannot assign `{}` to a variable of type `{}`",
                received, expected
            )),
            DiagnosticImpl::PrecisionLoss { .. } => ErrorTip::Suggestion(String::from(
                "The fractional part is dropped when the value is stored",
            )),
            DiagnosticImpl::DuplicateDeclaration { name } => {
                ErrorTip::Suggestion(format!("`{}` is already declared in this scope", name))
            }
            DiagnosticImpl::FunctionNameShadowed { name } => ErrorTip::Suggestion(format!(
                "`{}` names a function and cannot be reused as a variable",
                name
            )),
            DiagnosticImpl::UndeclaredName { name, in_global_scope } => {
                if *in_global_scope {
                    ErrorTip::Suggestion(format!("Usage of undeclared variable `{}`", name))
                } else {
                    ErrorTip::Suggestion(format!("Variable `{}` undefined in current scope", name))
                }
            }
            DiagnosticImpl::FunctionUsedAsVariable { .. } => ErrorTip::Suggestion(String::from(
                "Did you mean to call it?",
            )),
            DiagnosticImpl::UndefinedFunction { name } => {
                ErrorTip::Suggestion(format!("Function `{}` must be defined before it is called", name))
            }
            DiagnosticImpl::NotAFunction { name } => {
                ErrorTip::Suggestion(format!("`{}` is a variable", name))
            }
            DiagnosticImpl::Arity { expected, received, .. } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            DiagnosticImpl::ArgumentType { expected, received, .. } => ErrorTip::Suggestion(format!(
                "Expected argument type `{}`, received `{}`",
                expected, received
            )),
            DiagnosticImpl::ReturnOutsideFunction => ErrorTip::None,
            DiagnosticImpl::ReturnTypeMismatch { expected, received, .. } => ErrorTip::Suggestion(
                format!("Expected `{}`, got `{}`", expected, received),
            ),
            DiagnosticImpl::MissingReturn { function, .. } => ErrorTip::Suggestion(format!(
                "Add a return statement to `{}`",
                function
            )),
            DiagnosticImpl::BreakOutsideLoop | DiagnosticImpl::ContinueOutsideLoop => {
                ErrorTip::Suggestion(String::from("Only valid inside `while` or `repeat`"))
            }
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: line {}",
            self.get_severity(),
            self.internal_error,
            self.position.0
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticImpl {
    #[error("illegal operation, {left} {operator} {right}")]
    IllegalOperation { left: Type, operator: String, right: Type },
    #[error("assignment of {received} to {expected}")]
    TypeMismatch { expected: Type, received: Type },
    #[error("assignment of {assigned} to {declared}, possible loss of accuracy")]
    PrecisionLoss { declared: Type, assigned: Type },
    #[error("variable {name:?} already declared")]
    DuplicateDeclaration { name: String },
    #[error("function identifier {name:?} used as a variable")]
    FunctionNameShadowed { name: String },
    #[error("usage of undeclared name {name:?}")]
    UndeclaredName { name: String, in_global_scope: bool },
    #[error("function identifier {name:?} read as a variable")]
    FunctionUsedAsVariable { name: String },
    #[error("call of undefined function {name:?}")]
    UndefinedFunction { name: String },
    #[error("variable identifier {name:?} used as function call")]
    NotAFunction { name: String },
    #[error("improper number of args in {function:?} call: expected {expected}, received {received}")]
    Arity { function: String, expected: usize, received: usize },
    #[error("improper type of argument {index} in {function:?} call: expected {expected}, received {received}")]
    ArgumentType { function: String, index: usize, expected: Type, received: Type },
    #[error("return instruction outside a function")]
    ReturnOutsideFunction,
    #[error("improper returned type in {function:?}, expected {expected} got {received}")]
    ReturnTypeMismatch { function: String, expected: Type, received: Type },
    #[error("missing return statement in function {function:?} returning {return_type}")]
    MissingReturn { function: String, return_type: Type },
    #[error("break instruction outside a loop")]
    BreakOutsideLoop,
    #[error("continue instruction outside a loop")]
    ContinueOutsideLoop,
}

/// Errors from the compile time symbol table.
///
/// The type checker turns these into diagnostics at the offending line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbolError {
    #[error("{name:?} already declared in this scope")]
    DuplicateDeclaration { name: String },
    #[error("{name:?} is a global function")]
    FunctionNameShadowed { name: String },
    #[error("{name:?} is not declared")]
    UndeclaredName { name: String },
}

/// An error raised while executing a checked program.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    internal_error: RuntimeErrorImpl,
    position: Position,
}

impl RuntimeError {
    pub fn new(error_impl: RuntimeErrorImpl, position: Position) -> Self {
        RuntimeError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &RuntimeErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            RuntimeErrorImpl::DivisionByZero => "DivisionByZero",
            RuntimeErrorImpl::InvalidShift { .. } => "InvalidShift",
            RuntimeErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            RuntimeErrorImpl::UndefinedFunction { .. } => "UndefinedFunction",
            RuntimeErrorImpl::IllegalOperation { .. } => "IllegalOperation",
            RuntimeErrorImpl::RepetitionTooLarge { .. } => "RepetitionTooLarge",
            RuntimeErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            RuntimeErrorImpl::MissingReturnValue { .. } => "MissingReturnValue",
            RuntimeErrorImpl::SignalEscaped { .. } => "SignalEscaped",
            RuntimeErrorImpl::Output { .. } => "Output",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            RuntimeErrorImpl::DivisionByZero => ErrorTip::None,
            RuntimeErrorImpl::InvalidShift { amount } => ErrorTip::Suggestion(format!(
                "Shift amount {} is outside 0..64",
                amount
            )),
            RuntimeErrorImpl::UndefinedVariable { .. }
            | RuntimeErrorImpl::UndefinedFunction { .. }
            | RuntimeErrorImpl::IllegalOperation { .. }
            | RuntimeErrorImpl::SignalEscaped { .. }
            | RuntimeErrorImpl::MissingReturnValue { .. } => ErrorTip::Suggestion(String::from(
                "Programs must pass the type checker before they are run",
            )),
            RuntimeErrorImpl::RepetitionTooLarge { .. } => ErrorTip::Suggestion(format!(
                "Repeated strings are limited to {} bytes",
                crate::interpreter::expr::MAX_REPEATED_LENGTH
            )),
            RuntimeErrorImpl::InvalidLiteral { text } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid constant", text))
            }
            RuntimeErrorImpl::Output { .. } => ErrorTip::None,
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime error: {}: line {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for RuntimeError {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeErrorImpl {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid shift amount {amount}")]
    InvalidShift { amount: i64 },
    #[error("variable {name:?} is not bound")]
    UndefinedVariable { name: String },
    #[error("function {name:?} is not defined")]
    UndefinedFunction { name: String },
    #[error("illegal operation, {left} {operator} {right}")]
    IllegalOperation { left: String, operator: String, right: String },
    #[error("string repeated {count} times exceeds the maximum length")]
    RepetitionTooLarge { count: i64 },
    #[error("invalid literal {text:?}")]
    InvalidLiteral { text: String },
    #[error("function {function:?} finished without returning a value")]
    MissingReturnValue { function: String },
    #[error("{signal} escaped its enclosing construct")]
    SignalEscaped { signal: String },
    #[error("failed to write output: {message}")]
    Output { message: String },
}
