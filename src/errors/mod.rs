//! Error types and error handling for the toolchain.
//!
//! This module defines the two error families of the crate:
//!
//! - Static diagnostics produced by the type checker, carrying a severity and
//!   a source position. They accumulate and never abort the checking pass.
//! - Runtime errors raised by the interpreter when an operation cannot be
//!   completed (division by zero, a failing output sink, a malformed tree)
//!
//! Both carry a helpful tip for display.

pub mod errors;

#[cfg(test)]
mod tests;
