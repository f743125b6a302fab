//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic and runtime error types.

use crate::ast::types::Type;
use crate::errors::errors::{Diagnostic, DiagnosticImpl, ErrorTip, RuntimeError, RuntimeErrorImpl, Severity};
use crate::Position;
use std::rc::Rc;

fn position(line: u32) -> Position {
    Position(line, Rc::new("test.lang".to_string()))
}

#[test]
fn test_diagnostic_creation() {
    let diagnostic = Diagnostic::new(
        DiagnosticImpl::IllegalOperation {
            left: Type::String,
            operator: "-".to_string(),
            right: Type::Int,
        },
        position(10),
    );

    assert_eq!(diagnostic.get_error_name(), "IllegalOperationError");
    assert_eq!(diagnostic.get_line(), 10);
    assert_eq!(diagnostic.get_severity(), Severity::Error);
}

#[test]
fn test_precision_loss_is_a_warning() {
    let diagnostic = Diagnostic::new(
        DiagnosticImpl::PrecisionLoss {
            declared: Type::Int,
            assigned: Type::Float,
        },
        position(3),
    );

    assert_eq!(diagnostic.get_error_name(), "PrecisionLossWarning");
    assert_eq!(diagnostic.get_severity(), Severity::Warning);
    assert!(!diagnostic.is_error());
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticImpl::TypeMismatch {
            expected: Type::Int,
            received: Type::String,
        },
        position(4),
    );
    assert_eq!(diagnostic.to_string(), "Error: assignment of string to int: line 4");

    let warning = Diagnostic::new(
        DiagnosticImpl::PrecisionLoss {
            declared: Type::Int,
            assigned: Type::Float,
        },
        position(5),
    );
    assert_eq!(
        warning.to_string(),
        "Warning: assignment of float to int, possible loss of accuracy: line 5"
    );
}

#[test]
fn test_undeclared_name_tip_depends_on_scope() {
    let global = Diagnostic::new(
        DiagnosticImpl::UndeclaredName {
            name: "x".to_string(),
            in_global_scope: true,
        },
        position(1),
    );
    assert_eq!(global.get_tip().to_string(), "Usage of undeclared variable `x`");

    let nested = Diagnostic::new(
        DiagnosticImpl::UndeclaredName {
            name: "x".to_string(),
            in_global_scope: false,
        },
        position(1),
    );
    assert_eq!(nested.get_tip().to_string(), "Variable `x` undefined in current scope");
}

#[test]
fn test_diagnostic_names() {
    let cases = vec![
        (DiagnosticImpl::DuplicateDeclaration { name: "a".to_string() }, "DuplicateDeclarationError"),
        (DiagnosticImpl::FunctionNameShadowed { name: "f".to_string() }, "FunctionNameShadowedError"),
        (DiagnosticImpl::UndefinedFunction { name: "f".to_string() }, "UndefinedFunctionError"),
        (DiagnosticImpl::NotAFunction { name: "a".to_string() }, "NotAFunctionError"),
        (
            DiagnosticImpl::Arity { function: "f".to_string(), expected: 2, received: 1 },
            "ArityError",
        ),
        (DiagnosticImpl::ReturnOutsideFunction, "ReturnOutsideFunctionError"),
        (DiagnosticImpl::BreakOutsideLoop, "BreakOutsideLoopError"),
        (DiagnosticImpl::ContinueOutsideLoop, "ContinueOutsideLoopError"),
    ];

    for (kind, name) in cases {
        let diagnostic = Diagnostic::new(kind, position(1));
        assert_eq!(diagnostic.get_error_name(), name);
        assert_eq!(diagnostic.get_severity(), Severity::Error);
    }
}

#[test]
fn test_error_tip_none() {
    let diagnostic = Diagnostic::new(DiagnosticImpl::ReturnOutsideFunction, position(1));

    assert!(matches!(diagnostic.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_runtime_error() {
    let error = RuntimeError::new(RuntimeErrorImpl::DivisionByZero, position(8));

    assert_eq!(error.get_error_name(), "DivisionByZero");
    assert_eq!(error.get_position().0, 8);
    assert_eq!(error.to_string(), "Runtime error: division by zero: line 8");
}

#[test]
fn test_runtime_error_tip() {
    let error = RuntimeError::new(RuntimeErrorImpl::InvalidShift { amount: 70 }, position(2));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("70")),
        _ => panic!("Expected suggestion tip"),
    }
}
