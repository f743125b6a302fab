use std::{
    collections::HashMap,
    io::Write,
    ops::{Deref, DerefMut},
    rc::Rc,
};

use crate::{
    ast::{
        ast::{Node, Program},
        statements::FnDeclStmt,
    },
    errors::errors::{RuntimeError, RuntimeErrorImpl},
    Position,
};

use super::{
    memory::{Frame, MemoryStack},
    signal::Signal,
    value::Value,
};

/// Execution context of one program run.
///
/// Holds the frame stack, the functions defined so far and the sink print
/// statements write to. Independent runs use independent interpreters.
pub struct Interpreter<'a, W: Write> {
    pub(crate) memory: MemoryStack,
    /// Every executed definition lands here, nested ones included. The
    /// checker already restricts where a nested function may be called from.
    pub(crate) functions: HashMap<String, &'a FnDeclStmt>,
    pub(crate) output: W,
    file: Rc<String>,
}

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn new(file: &str, output: W) -> Self {
        Interpreter {
            memory: MemoryStack::new(),
            functions: HashMap::new(),
            output,
            file: Rc::new(file.to_string()),
        }
    }

    pub fn memory(&self) -> &MemoryStack {
        &self.memory
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn is_function_defined(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub(crate) fn error(&self, error: RuntimeErrorImpl, line: u32) -> RuntimeError {
        RuntimeError::new(error, Position(line, Rc::clone(&self.file)))
    }

    /// Pushes `frame` for as long as the returned guard lives.
    pub fn enter_frame(&mut self, frame: Frame) -> FrameGuard<'_, 'a, W> {
        self.memory.push_frame(frame);
        FrameGuard { interpreter: self }
    }

    pub fn execute_program(&mut self, program: &'a Program) -> Result<(), RuntimeError> {
        for stmt in program.constructions.iter() {
            let signal = self.execute_stmt(stmt)?;
            if !signal.is_normal() {
                return Err(self.error(
                    RuntimeErrorImpl::SignalEscaped {
                        signal: signal.to_string(),
                    },
                    stmt.line(),
                ));
            }
        }

        Ok(())
    }

    /// Dispatches on any node.
    ///
    /// Expressions yield their value, a statement yields the value it
    /// returns with, if any.
    pub fn visit(&mut self, node: Node<'a>) -> Result<Option<Value>, RuntimeError> {
        match node {
            Node::Program(program) => {
                self.execute_program(program)?;
                Ok(None)
            }
            Node::Stmt(stmt) => match self.execute_stmt(stmt)? {
                Signal::Normal => Ok(None),
                Signal::Return(value) => Ok(Some(value)),
                signal => Err(self.error(
                    RuntimeErrorImpl::SignalEscaped {
                        signal: signal.to_string(),
                    },
                    stmt.line(),
                )),
            },
            Node::Expr(expr) => Ok(Some(self.evaluate_expr(expr)?)),
        }
    }
}

/// Keeps a frame on the stack. The frame is popped when the guard drops,
/// including on early returns through `?`.
pub struct FrameGuard<'g, 'a, W: Write> {
    interpreter: &'g mut Interpreter<'a, W>,
}

impl<'g, 'a, W: Write> Deref for FrameGuard<'g, 'a, W> {
    type Target = Interpreter<'a, W>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl<'g, 'a, W: Write> DerefMut for FrameGuard<'g, 'a, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'g, 'a, W: Write> Drop for FrameGuard<'g, 'a, W> {
    fn drop(&mut self) {
        self.interpreter.memory.pop_frame();
    }
}

/// Executes a checked program, writing its output to `output`.
pub fn interpret<'a, W: Write>(
    program: &'a Program,
    file: &str,
    output: W,
) -> Result<Interpreter<'a, W>, RuntimeError> {
    let mut interpreter = Interpreter::new(file, output);
    interpreter.execute_program(program)?;
    Ok(interpreter)
}
