use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, LiteralKind},
        types::Type,
    },
    errors::errors::DiagnosticImpl,
};

use super::{operators::result_type, symbol_table::Symbol, type_checker::TypeChecker};

/// Computes the type of an expression, reporting what is wrong with it.
///
/// Returns `Type::Unknown` when the type cannot be determined; the error
/// explaining why has already been reported.
pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Type {
    match ast {
        Expr::Literal(literal) => match literal.kind {
            LiteralKind::Int => Type::Int,
            LiteralKind::Float => Type::Float,
            LiteralKind::String => Type::String,
        },
        Expr::Symbol(symbol) => match type_checker.symbols.resolve(&symbol.name) {
            Ok(Symbol::Variable(var_type)) => *var_type,
            Ok(Symbol::Function(_)) => {
                type_checker.report(
                    DiagnosticImpl::FunctionUsedAsVariable {
                        name: symbol.name.clone(),
                    },
                    symbol.line,
                );
                Type::Unknown
            }
            Err(error) => {
                type_checker.report_symbol_error(error, symbol.line);
                Type::Unknown
            }
        },
        Expr::Binary(binary) => type_check_binary(type_checker, binary),
        Expr::Call(call) => type_check_call(type_checker, call),
    }
}

fn type_check_binary(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> Type {
    let left = type_check_expr(type_checker, &binary.left);
    let right = type_check_expr(type_checker, &binary.right);

    if let Some(result) = result_type(binary.operator, left, right) {
        return result;
    }

    if !left.is_unknown() && !right.is_unknown() {
        type_checker.report(
            DiagnosticImpl::IllegalOperation {
                left,
                operator: binary.operator.symbol().to_string(),
                right,
            },
            binary.line,
        );
    }

    Type::Unknown
}

fn type_check_call(type_checker: &mut TypeChecker, call: &CallExpr) -> Type {
    let arguments: Vec<Type> = call
        .arguments
        .iter()
        .map(|argument| type_check_expr(type_checker, argument))
        .collect();

    let signature = match type_checker.symbols.resolve(&call.name) {
        Ok(Symbol::Function(signature)) => signature.clone(),
        Ok(Symbol::Variable(_)) => {
            type_checker.report(DiagnosticImpl::NotAFunction { name: call.name.clone() }, call.line);
            return Type::Unknown;
        }
        Err(_) => {
            type_checker.report(DiagnosticImpl::UndefinedFunction { name: call.name.clone() }, call.line);
            return Type::Unknown;
        }
    };

    if signature.parameters.len() != arguments.len() {
        type_checker.report(
            DiagnosticImpl::Arity {
                function: call.name.clone(),
                expected: signature.parameters.len(),
                received: arguments.len(),
            },
            call.line,
        );
        return signature.return_type;
    }

    // Arguments must match exactly, no widening
    for (index, (expected, received)) in signature.parameters.iter().zip(arguments.iter()).enumerate() {
        if expected != received && !received.is_unknown() {
            type_checker.report(
                DiagnosticImpl::ArgumentType {
                    function: call.name.clone(),
                    index: index + 1,
                    expected: *expected,
                    received: *received,
                },
                call.line,
            );
        }
    }

    signature.return_type
}
