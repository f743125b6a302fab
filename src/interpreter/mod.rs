//! Tree-walking interpreter.
//!
//! Executes a program that has passed the type checker directly over the
//! AST. The interpreter does not validate types again: running a tree the
//! checker rejected may end in a runtime error instead of a result.
//!
//! - `memory`: the runtime frame stack and its lookup rules
//! - `value`: runtime values and literal decoding
//! - `signal`: the outcome of executing a statement (normal, break, continue, return)
//! - `expr` / `stmt`: evaluation of expressions and execution of statements
//!
//! Every frame pushed by the interpreter is released by a guard when the
//! construct that pushed it is left, whichever way it is left. Function
//! calls recurse on the host stack and are not depth limited, a runaway
//! recursion overflows it.

pub mod expr;
pub mod interpreter;
pub mod memory;
pub mod signal;
pub mod stmt;
pub mod value;
