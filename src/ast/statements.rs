use std::slice::Iter;

use super::{
    ast::{Expr, Stmt},
    types::Type,
};

/// Condition
/// The test of an `if`, `while` or `repeat ... until`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub expression: Expr,
    pub line: u32,
}

impl Condition {
    pub fn new(expression: Expr) -> Self {
        let line = expression.line();
        Condition { expression, line }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub line: u32,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// One `name = value` entry of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Init {
    pub name: String,
    pub value: Expr,
    pub line: u32,
}

/// Variable Declaration
/// `int a = 1, b = 2;` declares every init with the same type.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub var_type: Type,
    pub inits: Vec<Init>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub name: String,
    pub value: Expr,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: Box<Stmt>,
    pub line: u32,
}

/// Repeat Statement
/// `repeat body until condition;` runs the body before testing the condition.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: Vec<Stmt>,
    pub condition: Condition,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub param_type: Type,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<Param>,
    pub body: BlockStmt,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Expr,
    pub line: u32,
}

/// Labeled Statement
/// `label: instruction`. The label does not take part in control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub label: String,
    pub body: Box<Stmt>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub line: u32,
}
