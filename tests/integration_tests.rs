//! Integration tests for end-to-end runs.
//!
//! These tests verify that the complete pipeline works correctly, from a
//! hand-built tree through type checking and interpretation, using only the
//! public API of the crate.

use minilang::{
    ast::{
        ast::{Expr, Program, Stmt},
        statements::{BlockStmt, Condition, FnDeclStmt, IfStmt, Param, ReturnStmt, WhileStmt},
        types::Type,
    },
    errors::errors::RuntimeErrorImpl,
    interpreter::interpreter::interpret,
    run, RunOutcome, MK_ASSIGN, MK_BINARY, MK_BLOCK, MK_CALL, MK_DECL, MK_FLOAT, MK_INT,
    MK_PRINT, MK_STRING, MK_VAR,
};

fn completed_output(program: &Program) -> String {
    match run(program, "test.lang", Vec::new()) {
        Ok(RunOutcome::Completed { checker, output }) => {
            assert!(checker.is_valid(), "Type checking should succeed");
            String::from_utf8(output).unwrap()
        }
        Ok(RunOutcome::Rejected(checker)) => panic!("Program rejected: {:?}", checker.diagnostics()),
        Err(error) => panic!("Runtime error: {}", error),
    }
}

fn function(name: &str, return_type: Type, parameters: Vec<(&str, Type)>, body: Vec<Stmt>, line: u32) -> Stmt {
    Stmt::FnDecl(FnDeclStmt {
        name: name.to_string(),
        return_type,
        parameters: parameters
            .into_iter()
            .map(|(name, param_type)| Param {
                name: name.to_string(),
                param_type,
                line,
            })
            .collect(),
        body: BlockStmt { body, line },
        line,
    })
}

fn return_stmt(value: Expr) -> Stmt {
    let line = value.line();
    Stmt::Return(ReturnStmt { value, line })
}

#[test]
fn test_run_simple_program() {
    let program = Program::new(vec![
        MK_DECL!(int; x = MK_INT!(42; 1); 1),
        MK_PRINT!(MK_VAR!(x; 2); 2),
    ]);

    assert_eq!(completed_output(&program), "42\n");
}

#[test]
fn test_run_function() {
    let program = Program::new(vec![
        function(
            "add",
            Type::Int,
            vec![("a", Type::Int), ("b", Type::Int)],
            vec![return_stmt(MK_BINARY!(Add, MK_VAR!(a; 2), MK_VAR!(b; 2); 2))],
            1,
        ),
        MK_PRINT!(MK_CALL!(add(MK_INT!(2; 4), MK_INT!(3; 4)); 4); 4),
    ]);

    assert_eq!(completed_output(&program), "5\n");
}

#[test]
fn test_run_control_flow() {
    let program = Program::new(vec![
        MK_DECL!(int; x = MK_INT!(10; 1); 1),
        Stmt::If(IfStmt {
            condition: Condition::new(MK_BINARY!(Greater, MK_VAR!(x; 2), MK_INT!(5; 2); 2)),
            then_branch: Box::new(MK_BLOCK!(2; MK_ASSIGN!(x = MK_BINARY!(Add, MK_VAR!(x; 3), MK_INT!(1; 3); 3); 3))),
            else_branch: Some(Box::new(MK_BLOCK!(4; MK_ASSIGN!(x = MK_BINARY!(Sub, MK_VAR!(x; 5), MK_INT!(1; 5); 5); 5)))),
            line: 2,
        }),
        MK_PRINT!(MK_VAR!(x; 7); 7),
    ]);

    assert_eq!(completed_output(&program), "11\n");
}

#[test]
fn test_run_while_loop() {
    let program = Program::new(vec![
        MK_DECL!(int; i = MK_INT!(0; 1), total = MK_INT!(0; 1); 1),
        Stmt::While(WhileStmt {
            condition: Condition::new(MK_BINARY!(Less, MK_VAR!(i; 2), MK_INT!(10; 2); 2)),
            body: Box::new(MK_BLOCK!(2;
                MK_ASSIGN!(i = MK_BINARY!(Add, MK_VAR!(i; 3), MK_INT!(1; 3); 3); 3),
                MK_ASSIGN!(total = MK_BINARY!(Add, MK_VAR!(total; 4), MK_VAR!(i; 4); 4); 4)
            )),
            line: 2,
        }),
        MK_PRINT!(MK_VAR!(total; 6); 6),
    ]);

    assert_eq!(completed_output(&program), "55\n");
}

#[test]
fn test_warnings_do_not_block_execution() {
    let program = Program::new(vec![
        MK_DECL!(int; a = MK_FLOAT!(3.75; 1); 1),
        MK_DECL!(float; half = MK_BINARY!(Div, MK_VAR!(a; 2), MK_FLOAT!(2.0; 2); 2); 2),
        MK_PRINT!(MK_VAR!(a; 3); 3),
        MK_PRINT!(MK_VAR!(half; 4); 4),
    ]);

    match run(&program, "test.lang", Vec::new()) {
        Ok(RunOutcome::Completed { checker, output }) => {
            assert_eq!(checker.warning_count(), 1);
            assert_eq!(String::from_utf8(output).unwrap(), "3\n1.5\n");
        }
        _ => panic!("Program with only warnings should run"),
    }
}

#[test]
fn test_rejected_program_does_not_run() {
    let program = Program::new(vec![
        MK_PRINT!(MK_STRING!("side effect"; 1); 1),
        MK_PRINT!(MK_BINARY!(Sub, MK_STRING!("a"; 2), MK_INT!(1; 2); 2); 2),
    ]);

    let mut output = Vec::new();
    match run(&program, "test.lang", &mut output) {
        Ok(RunOutcome::Rejected(checker)) => {
            assert_eq!(checker.error_count(), 1);
            let diagnostic = &checker.diagnostics()[0];
            assert_eq!(diagnostic.get_error_name(), "IllegalOperationError");
            assert_eq!(diagnostic.get_line(), 2);
            assert_eq!(diagnostic.to_string(), "Error: illegal operation, string - int: line 2");
        }
        _ => panic!("Program should be rejected"),
    }
    assert!(output.is_empty());
}

#[test]
fn test_runtime_error_is_reported() {
    let program = Program::new(vec![
        MK_DECL!(int; zero = MK_INT!(0; 1); 1),
        MK_PRINT!(MK_STRING!("before"; 2); 2),
        MK_PRINT!(MK_BINARY!(Mod, MK_INT!(5; 3), MK_VAR!(zero; 3); 3); 3),
        MK_PRINT!(MK_STRING!("after"; 4); 4),
    ]);

    let mut output = Vec::new();
    let error = match run(&program, "test.lang", &mut output) {
        Err(error) => error,
        _ => panic!("Division by zero should fail at runtime"),
    };

    assert_eq!(error.get_kind(), &RuntimeErrorImpl::DivisionByZero);
    assert_eq!(error.get_position().0, 3);
    assert_eq!(error.to_string(), "Runtime error: division by zero: line 3");
    assert_eq!(String::from_utf8(output).unwrap(), "before\n");
}

#[test]
fn test_run_fibonacci() {
    let program = Program::new(vec![
        function(
            "fib",
            Type::Int,
            vec![("n", Type::Int)],
            vec![
                Stmt::If(IfStmt {
                    condition: Condition::new(MK_BINARY!(Less, MK_VAR!(n; 2), MK_INT!(2; 2); 2)),
                    then_branch: Box::new(return_stmt(MK_VAR!(n; 2))),
                    else_branch: None,
                    line: 2,
                }),
                return_stmt(MK_BINARY!(
                    Add,
                    MK_CALL!(fib(MK_BINARY!(Sub, MK_VAR!(n; 3), MK_INT!(1; 3); 3)); 3),
                    MK_CALL!(fib(MK_BINARY!(Sub, MK_VAR!(n; 3), MK_INT!(2; 3); 3)); 3);
                    3
                )),
            ],
            1,
        ),
        MK_DECL!(int; i = MK_INT!(0; 5); 5),
        Stmt::While(WhileStmt {
            condition: Condition::new(MK_BINARY!(LessEquals, MK_VAR!(i; 6), MK_INT!(10; 6); 6)),
            body: Box::new(MK_BLOCK!(6;
                MK_PRINT!(MK_CALL!(fib(MK_VAR!(i; 7)); 7); 7),
                MK_ASSIGN!(i = MK_BINARY!(Add, MK_VAR!(i; 8), MK_INT!(1; 8); 8); 8)
            )),
            line: 6,
        }),
    ]);

    assert_eq!(completed_output(&program), "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n");
}

#[test]
fn test_run_string_program() {
    let program = Program::new(vec![
        MK_DECL!(string; greeting = MK_STRING!("hello"; 1); 1),
        MK_ASSIGN!(greeting = MK_BINARY!(Add, MK_VAR!(greeting; 2), MK_STRING!(", world"; 2); 2); 2),
        MK_PRINT!(MK_VAR!(greeting; 3); 3),
        MK_PRINT!(MK_BINARY!(Mul, MK_STRING!("-"; 4), MK_INT!(5; 4); 4); 4),
    ]);

    assert_eq!(completed_output(&program), "hello, world\n-----\n");
}

#[test]
fn test_interpret_without_checking() {
    let program = Program::new(vec![
        function(
            "square",
            Type::Int,
            vec![("n", Type::Int)],
            vec![return_stmt(MK_BINARY!(Mul, MK_VAR!(n; 2), MK_VAR!(n; 2); 2))],
            1,
        ),
        MK_DECL!(int; x = MK_CALL!(square(MK_INT!(7; 4)); 4); 4),
        MK_PRINT!(MK_VAR!(x; 5); 5),
    ]);

    let interpreter = interpret(&program, "test.lang", Vec::new()).unwrap();
    assert!(interpreter.is_function_defined("square"));
    assert_eq!(interpreter.memory().depth(), 1);
    assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "49\n");
}

#[test]
fn test_interpret_reports_runtime_errors() {
    let program = Program::new(vec![MK_PRINT!(
        MK_BINARY!(Mul, MK_STRING!("ab"; 3), MK_INT!(9223372036854775807; 3); 3);
        3
    )]);

    let error = match interpret(&program, "test.lang", Vec::new()) {
        Err(error) => error,
        Ok(_) => panic!("Oversized repetition should fail at runtime"),
    };
    assert_eq!(error.get_kind(), &RuntimeErrorImpl::RepetitionTooLarge { count: i64::MAX });
    assert_eq!(error.get_position().0, 3);
}
