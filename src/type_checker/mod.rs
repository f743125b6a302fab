//! Type checking and semantic analysis module.
//!
//! This module performs the static pass over the AST. It:
//!
//! - Computes the type of every expression from the operator table
//! - Checks declarations, assignments and returns for type compatibility
//! - Resolves variable and function references through a scope chain
//! - Checks function calls for arity and argument types
//! - Rejects `break`, `continue` and `return` outside their constructs
//!
//! Errors never abort the pass. Each one is recorded as a diagnostic and
//! clears the validity flag, so a single run reports as much as possible.

pub mod expr;
pub mod operators;
pub mod symbol_table;
pub mod type_checker;
