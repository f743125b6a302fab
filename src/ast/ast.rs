use super::{
    expressions::{BinaryExpr, CallExpr, LiteralExpr, SymbolExpr},
    statements::{
        AssignmentStmt, BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, FnDeclStmt, IfStmt,
        LabeledStmt, PrintStmt, RepeatStmt, ReturnStmt, VarDeclStmt, WhileStmt,
    },
};

/// Program
///
/// The root of a parsed source file. Top level constructions are declarations,
/// function definitions and instructions, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub constructions: Vec<Stmt>,
}

impl Program {
    pub fn new(constructions: Vec<Stmt>) -> Self {
        Program { constructions }
    }
}

/// Statement
///
/// Every statement kind of the language. Each variant owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    Repeat(RepeatStmt),
    FnDecl(FnDeclStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Print(PrintStmt),
    Labeled(LabeledStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the source line the statement starts on.
    pub fn line(&self) -> u32 {
        match self {
            Stmt::VarDecl(stmt) => stmt.line,
            Stmt::Assignment(stmt) => stmt.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::While(stmt) => stmt.line,
            Stmt::Repeat(stmt) => stmt.line,
            Stmt::FnDecl(stmt) => stmt.line,
            Stmt::Block(stmt) => stmt.line,
            Stmt::Return(stmt) => stmt.line,
            Stmt::Break(stmt) => stmt.line,
            Stmt::Continue(stmt) => stmt.line,
            Stmt::Print(stmt) => stmt.line,
            Stmt::Labeled(stmt) => stmt.line,
            Stmt::Expression(stmt) => stmt.line,
        }
    }
}

/// Expression
///
/// Every expression kind of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn line(&self) -> u32 {
        match self {
            Expr::Literal(expr) => expr.line,
            Expr::Symbol(expr) => expr.line,
            Expr::Binary(expr) => expr.line,
            Expr::Call(expr) => expr.line,
        }
    }
}

/// Node
///
/// A borrowed view over any node of the tree, used wherever a pass needs to
/// walk the tree generically instead of matching on a concrete kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    /// Returns the source line of the node. The program root reports line 0.
    pub fn line(&self) -> u32 {
        match self {
            Node::Program(_) => 0,
            Node::Stmt(stmt) => stmt.line(),
            Node::Expr(expr) => expr.line(),
        }
    }

    /// Enumerates the direct children of the node in source order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => program.constructions.iter().map(Node::Stmt).collect(),
            Node::Stmt(stmt) => stmt_children(stmt),
            Node::Expr(expr) => match expr {
                Expr::Literal(_) | Expr::Symbol(_) => vec![],
                Expr::Binary(binary) => vec![Node::Expr(&binary.left), Node::Expr(&binary.right)],
                Expr::Call(call) => call.arguments.iter().map(Node::Expr).collect(),
            },
        }
    }
}

fn stmt_children(stmt: &Stmt) -> Vec<Node<'_>> {
    match stmt {
        Stmt::VarDecl(decl) => decl.inits.iter().map(|init| Node::Expr(&init.value)).collect(),
        Stmt::Assignment(assignment) => vec![Node::Expr(&assignment.value)],
        Stmt::If(if_stmt) => {
            let mut children = vec![
                Node::Expr(&if_stmt.condition.expression),
                Node::Stmt(&if_stmt.then_branch),
            ];
            if let Some(else_branch) = &if_stmt.else_branch {
                children.push(Node::Stmt(else_branch));
            }
            children
        }
        Stmt::While(while_stmt) => vec![
            Node::Expr(&while_stmt.condition.expression),
            Node::Stmt(&while_stmt.body),
        ],
        Stmt::Repeat(repeat) => {
            let mut children: Vec<Node<'_>> = repeat.body.iter().map(Node::Stmt).collect();
            children.push(Node::Expr(&repeat.condition.expression));
            children
        }
        Stmt::FnDecl(fn_decl) => fn_decl.body.body.iter().map(Node::Stmt).collect(),
        Stmt::Block(block) => block.body.iter().map(Node::Stmt).collect(),
        Stmt::Return(return_stmt) => vec![Node::Expr(&return_stmt.value)],
        Stmt::Break(_) | Stmt::Continue(_) => vec![],
        Stmt::Print(print) => vec![Node::Expr(&print.value)],
        Stmt::Labeled(labeled) => vec![Node::Stmt(&labeled.body)],
        Stmt::Expression(stmt) => vec![Node::Expr(&stmt.expression)],
    }
}
