#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostic, ErrorTip, RuntimeError},
    interpreter::interpreter::interpret,
    type_checker::type_checker::{type_check, TypeChecker},
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod macros;
pub mod type_checker;

extern crate regex;

/// A source line together with the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Result of running a program through both passes.
pub enum RunOutcome<W: Write> {
    /// The checker found errors, the interpreter never ran.
    Rejected(TypeChecker),
    Completed { checker: TypeChecker, output: W },
}

/// Type checks `program` and, if it is valid, executes it with `output` as
/// the print sink.
pub fn run<W: Write>(program: &Program, file: &str, output: W) -> Result<RunOutcome<W>, RuntimeError> {
    let checker = type_check(program, file);

    if !checker.is_valid() {
        return Ok(RunOutcome::Rejected(checker));
    }

    let interpreter = interpret(program, file, output)?;
    Ok(RunOutcome::Completed {
        checker,
        output: interpreter.into_output(),
    })
}

pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line as usize - 1)
}

/// Renders a diagnostic in the multi-line report format, pointing at the
/// offending source line when it is available.
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str) -> String {
    /*
        Error: IllegalOperationError
        -> final.lang
           |
        20 | print "a" - 1;
    */

    let position = diagnostic.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    let mut lines = vec![];
    if let ErrorTip::None = diagnostic.get_tip() {
        lines.push(format!("{}: {}", diagnostic.get_severity(), diagnostic.get_error_name()));
    } else {
        lines.push(format!(
            "{}: {} ({})",
            diagnostic.get_severity(),
            diagnostic.get_error_name(),
            diagnostic.get_tip()
        ));
    }
    lines.push(format!("-> {}", position.1));
    lines.push(format!("{:>padding$}", "|"));

    if let Some(line_text) = get_source_line(source, position.0) {
        lines.push(format!("{} | {}", line_string, line_text.trim()));
    }

    lines.join("\n")
}

pub fn display_diagnostic(diagnostic: &Diagnostic, source: &str) {
    println!("{}", render_diagnostic(diagnostic, source));
}

pub fn render_runtime_error(error: &RuntimeError) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!(
        "{}\n-> {}:{}\n   {}",
        header,
        error.get_position().1,
        error.get_position().0,
        error
    )
}

pub fn display_runtime_error(error: &RuntimeError) {
    println!("{}", render_runtime_error(error));
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        ast::types::Type,
        errors::errors::{Diagnostic, DiagnosticImpl, RuntimeError, RuntimeErrorImpl},
        Position,
    };

    #[test]
    fn test_get_source_line() {
        let source = "int a = 1;\n\nprint a;\n";

        assert_eq!(super::get_source_line(source, 1), Some("int a = 1;"));
        assert_eq!(super::get_source_line(source, 2), Some(""));
        assert_eq!(super::get_source_line(source, 3), Some("print a;"));
        assert_eq!(super::get_source_line(source, 4), None);
        assert_eq!(super::get_source_line(source, 0), None);
    }

    #[test]
    fn test_render_diagnostic() {
        let source = "int a = 1;\nprint \"a\" - 1;\n";
        let diagnostic = Diagnostic::new(
            DiagnosticImpl::IllegalOperation {
                left: Type::String,
                operator: "-".to_string(),
                right: Type::Int,
            },
            Position(2, Rc::new("final.lang".to_string())),
        );

        assert_eq!(
            super::render_diagnostic(&diagnostic, source),
            "Error: IllegalOperationError\n-> final.lang\n  |\n2 | print \"a\" - 1;"
        );
    }

    #[test]
    fn test_render_diagnostic_with_tip() {
        let diagnostic = Diagnostic::new(
            DiagnosticImpl::PrecisionLoss {
                declared: Type::Int,
                assigned: Type::Float,
            },
            Position(12, Rc::new("final.lang".to_string())),
        );

        // Line 12 is past the end of the source, no excerpt is shown
        assert_eq!(
            super::render_diagnostic(&diagnostic, "int a = 1.5;"),
            "Warning: PrecisionLossWarning (The fractional part is dropped when the value is stored)\n-> final.lang\n   |"
        );
    }

    #[test]
    fn test_render_runtime_error() {
        let error = RuntimeError::new(RuntimeErrorImpl::DivisionByZero, Position(3, Rc::new("final.lang".to_string())));

        assert_eq!(
            super::render_runtime_error(&error),
            "Error: DivisionByZero\n-> final.lang:3\n   Runtime error: division by zero: line 3"
        );
    }
}
