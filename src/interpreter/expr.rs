use std::io::Write;

use crate::{
    ast::{ast::Expr, expressions::{BinaryOperator, CallExpr}},
    errors::errors::{RuntimeError, RuntimeErrorImpl},
};

use super::{interpreter::Interpreter, memory::Frame, signal::Signal, value::Value};

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn evaluate_expr(&mut self, expr: &'a Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => {
                Value::from_literal(literal).map_err(|error| self.error(error, literal.line))
            }
            Expr::Symbol(symbol) => self.memory.lookup(&symbol.name).ok_or_else(|| {
                self.error(
                    RuntimeErrorImpl::UndefinedVariable {
                        name: symbol.name.clone(),
                    },
                    symbol.line,
                )
            }),
            Expr::Binary(binary) => {
                // Both operands are always evaluated, AND / OR included
                let left = self.evaluate_expr(&binary.left)?;
                let right = self.evaluate_expr(&binary.right)?;
                apply_binary(binary.operator, left, right).map_err(|error| self.error(error, binary.line))
            }
            Expr::Call(call) => self.call_function(call),
        }
    }

    fn call_function(&mut self, call: &'a CallExpr) -> Result<Value, RuntimeError> {
        let function = self.functions.get(&call.name).copied().ok_or_else(|| {
            self.error(
                RuntimeErrorImpl::UndefinedFunction {
                    name: call.name.clone(),
                },
                call.line,
            )
        })?;

        // Arguments are evaluated in the caller's frame, left to right
        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in call.arguments.iter() {
            arguments.push(self.evaluate_expr(argument)?);
        }

        let mut frame = Frame::call(&function.name);
        for (param, value) in function.parameters.iter().zip(arguments) {
            frame.declare(param.name.clone(), value);
        }

        // The body runs directly in the call frame, without a block frame of its own
        let mut scope = self.enter_frame(frame);
        let signal = scope.execute_statements(&function.body.body)?;
        drop(scope);

        match signal {
            Signal::Return(value) => Ok(value),
            Signal::Normal => Err(self.error(
                RuntimeErrorImpl::MissingReturnValue {
                    function: function.name.clone(),
                },
                call.line,
            )),
            signal => Err(self.error(
                RuntimeErrorImpl::SignalEscaped {
                    signal: signal.to_string(),
                },
                call.line,
            )),
        }
    }
}

/// Applies a binary operator to two runtime values.
pub fn apply_binary(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeErrorImpl> {
    match (left, right) {
        (Value::Int(left), Value::Int(right)) => apply_int(operator, left, right),
        (Value::Int(left), Value::Float(right)) => apply_float(operator, left as f64, right),
        (Value::Float(left), Value::Int(right)) => apply_float(operator, left, right as f64),
        (Value::Float(left), Value::Float(right)) => apply_float(operator, left, right),
        (Value::String(left), Value::String(right)) => apply_string(operator, left, right),
        (Value::String(left), Value::Int(count)) if operator == BinaryOperator::Mul => repeat_string(left, count),
        (left, right) => Err(illegal(operator, &left, &right)),
    }
}

/// Upper bound on the length of a string built by `string * int`.
pub const MAX_REPEATED_LENGTH: usize = 1 << 24;

fn repeat_string(text: String, count: i64) -> Result<Value, RuntimeErrorImpl> {
    let times = usize::try_from(count.max(0)).map_err(|_| RuntimeErrorImpl::RepetitionTooLarge { count })?;
    match text.len().checked_mul(times) {
        Some(length) if length <= MAX_REPEATED_LENGTH => Ok(Value::String(text.repeat(times))),
        _ => Err(RuntimeErrorImpl::RepetitionTooLarge { count }),
    }
}

fn illegal(operator: BinaryOperator, left: &Value, right: &Value) -> RuntimeErrorImpl {
    RuntimeErrorImpl::IllegalOperation {
        left: left.get_type().to_string(),
        operator: operator.symbol().to_string(),
        right: right.get_type().to_string(),
    }
}

fn shift_amount(amount: i64) -> Result<u32, RuntimeErrorImpl> {
    if (0..64).contains(&amount) {
        Ok(amount as u32)
    } else {
        Err(RuntimeErrorImpl::InvalidShift { amount })
    }
}

fn apply_int(operator: BinaryOperator, left: i64, right: i64) -> Result<Value, RuntimeErrorImpl> {
    let result = match operator {
        BinaryOperator::Add => left.wrapping_add(right),
        BinaryOperator::Sub => left.wrapping_sub(right),
        BinaryOperator::Mul => left.wrapping_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeErrorImpl::DivisionByZero);
            }
            left.wrapping_div(right)
        }
        BinaryOperator::Mod => {
            if right == 0 {
                return Err(RuntimeErrorImpl::DivisionByZero);
            }
            left.wrapping_rem(right)
        }
        BinaryOperator::Shl => left << shift_amount(right)?,
        BinaryOperator::Shr => left >> shift_amount(right)?,
        BinaryOperator::BitOr => left | right,
        BinaryOperator::BitAnd => left & right,
        BinaryOperator::BitXor => left ^ right,
        BinaryOperator::And => (left != 0 && right != 0) as i64,
        BinaryOperator::Or => (left != 0 || right != 0) as i64,
        BinaryOperator::Equals => (left == right) as i64,
        BinaryOperator::NotEquals => (left != right) as i64,
        BinaryOperator::Less => (left < right) as i64,
        BinaryOperator::Greater => (left > right) as i64,
        BinaryOperator::LessEquals => (left <= right) as i64,
        BinaryOperator::GreaterEquals => (left >= right) as i64,
    };

    Ok(Value::Int(result))
}

fn apply_float(operator: BinaryOperator, left: f64, right: f64) -> Result<Value, RuntimeErrorImpl> {
    match operator {
        BinaryOperator::Add => Ok(Value::Float(left + right)),
        BinaryOperator::Sub => Ok(Value::Float(left - right)),
        BinaryOperator::Mul => Ok(Value::Float(left * right)),
        BinaryOperator::Div => Ok(Value::Float(left / right)),
        BinaryOperator::Equals => Ok(Value::Int((left == right) as i64)),
        BinaryOperator::NotEquals => Ok(Value::Int((left != right) as i64)),
        BinaryOperator::Less => Ok(Value::Int((left < right) as i64)),
        BinaryOperator::Greater => Ok(Value::Int((left > right) as i64)),
        BinaryOperator::LessEquals => Ok(Value::Int((left <= right) as i64)),
        BinaryOperator::GreaterEquals => Ok(Value::Int((left >= right) as i64)),
        _ => Err(illegal(operator, &Value::Float(left), &Value::Float(right))),
    }
}

fn apply_string(operator: BinaryOperator, left: String, right: String) -> Result<Value, RuntimeErrorImpl> {
    match operator {
        BinaryOperator::Add => Ok(Value::String(left + &right)),
        BinaryOperator::Equals => Ok(Value::Int((left == right) as i64)),
        BinaryOperator::NotEquals => Ok(Value::Int((left != right) as i64)),
        BinaryOperator::Less => Ok(Value::Int((left < right) as i64)),
        BinaryOperator::Greater => Ok(Value::Int((left > right) as i64)),
        BinaryOperator::LessEquals => Ok(Value::Int((left <= right) as i64)),
        BinaryOperator::GreaterEquals => Ok(Value::Int((left >= right) as i64)),
        _ => Err(illegal(operator, &Value::String(left), &Value::String(right))),
    }
}
