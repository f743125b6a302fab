use std::io::Write;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, Condition, RepeatStmt, VarDeclStmt, WhileStmt},
    },
    errors::errors::{RuntimeError, RuntimeErrorImpl},
};

use super::{interpreter::Interpreter, memory::Frame, signal::Signal};

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn execute_stmt(&mut self, stmt: &'a Stmt) -> Result<Signal, RuntimeError> {
        match stmt {
            Stmt::VarDecl(var_decl_stmt) => {
                self.execute_var_decl(var_decl_stmt)?;
                Ok(Signal::Normal)
            }
            Stmt::Assignment(assignment) => {
                let mut value = self.evaluate_expr(&assignment.value)?;
                if let Some(current) = self.memory.lookup(&assignment.name) {
                    value = value.coerce_to(current.get_type());
                }
                self.memory.assign_or_declare_global(&assignment.name, value);
                Ok(Signal::Normal)
            }
            Stmt::If(if_stmt) => {
                if self.evaluate_condition(&if_stmt.condition)? {
                    self.execute_stmt(&if_stmt.then_branch)
                } else if let Some(else_branch) = &if_stmt.else_branch {
                    self.execute_stmt(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            Stmt::While(while_stmt) => self.execute_while(while_stmt),
            Stmt::Repeat(repeat) => self.execute_repeat(repeat),
            Stmt::FnDecl(fn_decl_stmt) => {
                self.functions.insert(fn_decl_stmt.name.clone(), fn_decl_stmt);
                Ok(Signal::Normal)
            }
            Stmt::Block(block) => self.execute_block(block),
            Stmt::Return(return_stmt) => Ok(Signal::Return(self.evaluate_expr(&return_stmt.value)?)),
            Stmt::Break(_) => Ok(Signal::Break),
            Stmt::Continue(_) => Ok(Signal::Continue),
            Stmt::Print(print) => {
                let value = self.evaluate_expr(&print.value)?;
                writeln!(self.output, "{}", value).map_err(|error| {
                    self.error(
                        RuntimeErrorImpl::Output {
                            message: error.to_string(),
                        },
                        print.line,
                    )
                })?;
                Ok(Signal::Normal)
            }
            Stmt::Labeled(labeled) => self.execute_stmt(&labeled.body),
            Stmt::Expression(stmt) => {
                self.evaluate_expr(&stmt.expression)?;
                Ok(Signal::Normal)
            }
        }
    }

    /// Runs statements in the current frame, stopping at the first signal
    /// that is not `Normal`.
    pub fn execute_statements(&mut self, statements: &'a [Stmt]) -> Result<Signal, RuntimeError> {
        for stmt in statements.iter() {
            let signal = self.execute_stmt(stmt)?;
            if !signal.is_normal() {
                return Ok(signal);
            }
        }

        Ok(Signal::Normal)
    }

    pub fn execute_block(&mut self, block: &'a BlockStmt) -> Result<Signal, RuntimeError> {
        let mut scope = self.enter_frame(Frame::block("block"));
        let signal = scope.execute_statements(&block.body)?;
        Ok(signal)
    }

    pub fn evaluate_condition(&mut self, condition: &'a Condition) -> Result<bool, RuntimeError> {
        Ok(self.evaluate_expr(&condition.expression)?.is_truthy())
    }

    fn execute_var_decl(&mut self, var_decl_stmt: &'a VarDeclStmt) -> Result<(), RuntimeError> {
        for init in var_decl_stmt.inits.iter() {
            let value = self.evaluate_expr(&init.value)?.coerce_to(var_decl_stmt.var_type);
            self.memory.declare(&init.name, value);
        }

        Ok(())
    }

    fn execute_while(&mut self, while_stmt: &'a WhileStmt) -> Result<Signal, RuntimeError> {
        while self.evaluate_condition(&while_stmt.condition)? {
            // Fresh frame per iteration, declarations do not survive into the next one
            let mut scope = self.enter_frame(Frame::block("while"));
            let signal = scope.execute_stmt(&while_stmt.body)?;
            drop(scope);

            match signal {
                Signal::Normal | Signal::Continue => {}
                Signal::Break => break,
                Signal::Return(value) => return Ok(Signal::Return(value)),
            }
        }

        Ok(Signal::Normal)
    }

    fn execute_repeat(&mut self, repeat: &'a RepeatStmt) -> Result<Signal, RuntimeError> {
        loop {
            let mut scope = self.enter_frame(Frame::block("repeat"));
            let signal = scope.execute_statements(&repeat.body)?;
            drop(scope);

            match signal {
                Signal::Normal | Signal::Continue => {}
                Signal::Break => break,
                Signal::Return(value) => return Ok(Signal::Return(value)),
            }

            if self.evaluate_condition(&repeat.condition)? {
                break;
            }
        }

        Ok(Signal::Normal)
    }
}
