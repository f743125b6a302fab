use std::rc::Rc;

use crate::{
    ast::{
        ast::{Node, Program, Stmt},
        statements::{AssignmentStmt, BlockStmt, FnDeclStmt, ReturnStmt, VarDeclStmt},
        types::Type,
    },
    errors::errors::{Diagnostic, DiagnosticImpl, Severity, SymbolError},
    Position,
};

use super::{
    expr::type_check_expr,
    symbol_table::{FunctionSignature, ScopeLabel, Symbol, SymbolTable},
};

#[derive(Debug)]
pub struct TypeChecker {
    pub symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    is_valid: bool,
    file: Rc<String>,
}

impl TypeChecker {
    pub fn new(file: &str) -> Self {
        TypeChecker {
            symbols: SymbolTable::new(),
            diagnostics: vec![],
            is_valid: true,
            file: Rc::new(file.to_string()),
        }
    }

    /// False as soon as one error (not warning) has been reported.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.get_severity() == Severity::Warning)
            .count()
    }

    pub fn report(&mut self, diagnostic: DiagnosticImpl, line: u32) {
        let diagnostic = Diagnostic::new(diagnostic, Position(line, Rc::clone(&self.file)));
        if diagnostic.is_error() {
            self.is_valid = false;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn report_symbol_error(&mut self, error: SymbolError, line: u32) {
        let diagnostic = match error {
            SymbolError::DuplicateDeclaration { name } => DiagnosticImpl::DuplicateDeclaration { name },
            SymbolError::FunctionNameShadowed { name } => DiagnosticImpl::FunctionNameShadowed { name },
            SymbolError::UndeclaredName { name } => DiagnosticImpl::UndeclaredName {
                name,
                in_global_scope: self.symbols.is_global_scope(),
            },
        };
        self.report(diagnostic, line);
    }

    pub fn declare(&mut self, name: &str, symbol: Symbol, line: u32) {
        if let Err(error) = self.symbols.declare(name, symbol) {
            self.report_symbol_error(error, line);
        }
    }

    /// Checks that a value of type `assigned` may be stored in a variable of
    /// type `declared`.
    pub fn check_compatibility(&mut self, declared: Type, assigned: Type, line: u32) {
        if declared == assigned || declared.is_unknown() || assigned.is_unknown() {
            return;
        }

        match (declared, assigned) {
            (Type::Float, Type::Int) => {}
            (Type::Int, Type::Float) => self.report(DiagnosticImpl::PrecisionLoss { declared, assigned }, line),
            _ => self.report(
                DiagnosticImpl::TypeMismatch {
                    expected: declared,
                    received: assigned,
                },
                line,
            ),
        }
    }

    /// Dispatches on any node. Expressions yield their type.
    pub fn visit(&mut self, node: Node<'_>) -> Option<Type> {
        match node {
            Node::Program(program) => {
                type_check_program(self, program);
                None
            }
            Node::Stmt(stmt) => {
                type_check_stmt(self, stmt);
                None
            }
            Node::Expr(expr) => Some(type_check_expr(self, expr)),
        }
    }
}

pub fn type_check_program(type_checker: &mut TypeChecker, program: &Program) {
    for stmt in program.constructions.iter() {
        type_check_stmt(type_checker, stmt);
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) {
    match ast {
        Stmt::VarDecl(var_decl_stmt) => type_check_var_decl(type_checker, var_decl_stmt),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
        Stmt::If(if_stmt) => {
            type_check_expr(type_checker, &if_stmt.condition.expression);
            type_check_stmt(type_checker, &if_stmt.then_branch);
            if let Some(else_branch) = &if_stmt.else_branch {
                type_check_stmt(type_checker, else_branch);
            }
        }
        Stmt::While(while_stmt) => {
            type_check_expr(type_checker, &while_stmt.condition.expression);
            type_checker.symbols.push_scope(ScopeLabel::Loop);
            type_check_stmt(type_checker, &while_stmt.body);
            type_checker.symbols.pop_scope();
        }
        Stmt::Repeat(repeat) => {
            type_checker.symbols.push_scope(ScopeLabel::Loop);
            for stmt in repeat.body.iter() {
                type_check_stmt(type_checker, stmt);
            }
            type_checker.symbols.pop_scope();
            type_check_expr(type_checker, &repeat.condition.expression);
        }
        Stmt::FnDecl(fn_decl_stmt) => type_check_fn_decl(type_checker, fn_decl_stmt),
        Stmt::Block(block) => type_check_block(type_checker, block),
        Stmt::Return(return_stmt) => type_check_return(type_checker, return_stmt),
        Stmt::Break(break_stmt) => {
            if !type_checker.symbols.in_loop() {
                type_checker.report(DiagnosticImpl::BreakOutsideLoop, break_stmt.line);
            }
        }
        Stmt::Continue(continue_stmt) => {
            if !type_checker.symbols.in_loop() {
                type_checker.report(DiagnosticImpl::ContinueOutsideLoop, continue_stmt.line);
            }
        }
        Stmt::Print(print) => {
            type_check_expr(type_checker, &print.value);
        }
        Stmt::Labeled(labeled) => type_check_stmt(type_checker, &labeled.body),
        Stmt::Expression(stmt) => {
            type_check_expr(type_checker, &stmt.expression);
        }
    }
}

pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) {
    type_checker.symbols.push_scope(ScopeLabel::Block);
    for stmt in block.iter() {
        type_check_stmt(type_checker, stmt);
    }
    type_checker.symbols.pop_scope();
}

fn type_check_var_decl(type_checker: &mut TypeChecker, var_decl_stmt: &VarDeclStmt) {
    for init in var_decl_stmt.inits.iter() {
        // The initializer is checked before the name exists, `int a = a;`
        // reads an outer `a`
        let assigned = type_check_expr(type_checker, &init.value);
        type_checker.check_compatibility(var_decl_stmt.var_type, assigned, init.line);
        type_checker.declare(&init.name, Symbol::Variable(var_decl_stmt.var_type), init.line);
    }
}

fn type_check_assignment(type_checker: &mut TypeChecker, assignment: &AssignmentStmt) {
    let target = type_checker.symbols.resolve(&assignment.name).cloned();
    let assigned = type_check_expr(type_checker, &assignment.value);

    match target {
        Ok(Symbol::Variable(declared)) => {
            type_checker.check_compatibility(declared, assigned, assignment.line)
        }
        Ok(Symbol::Function(_)) => type_checker.report(
            DiagnosticImpl::FunctionUsedAsVariable {
                name: assignment.name.clone(),
            },
            assignment.line,
        ),
        Err(error) => type_checker.report_symbol_error(error, assignment.line),
    }
}

fn type_check_fn_decl(type_checker: &mut TypeChecker, fn_decl_stmt: &FnDeclStmt) {
    let signature = FunctionSignature {
        return_type: fn_decl_stmt.return_type,
        parameters: fn_decl_stmt.parameters.iter().map(|param| param.param_type).collect(),
        has_returned: false,
    };

    // A redefinition keeps the first signature, its body is not checked
    if let Err(error) = type_checker.symbols.declare(&fn_decl_stmt.name, Symbol::Function(signature)) {
        type_checker.report_symbol_error(error, fn_decl_stmt.line);
        return;
    }

    type_checker.symbols.push_scope(ScopeLabel::Function(fn_decl_stmt.name.clone()));
    for param in fn_decl_stmt.parameters.iter() {
        type_checker.declare(&param.name, Symbol::Variable(param.param_type), param.line);
    }
    // The body shares the function scope with the parameters
    for stmt in fn_decl_stmt.body.iter() {
        type_check_stmt(type_checker, stmt);
    }
    type_checker.symbols.pop_scope();

    let has_returned = type_checker
        .symbols
        .function_signature_mut(&fn_decl_stmt.name)
        .map(|signature| signature.has_returned)
        .unwrap_or(true);

    if !has_returned {
        type_checker.report(
            DiagnosticImpl::MissingReturn {
                function: fn_decl_stmt.name.clone(),
                return_type: fn_decl_stmt.return_type,
            },
            fn_decl_stmt.body.line,
        );
    }
}

fn type_check_return(type_checker: &mut TypeChecker, return_stmt: &ReturnStmt) {
    let received = type_check_expr(type_checker, &return_stmt.value);

    let function = match type_checker.symbols.enclosing_function() {
        Some(function) => function.to_string(),
        None => {
            type_checker.report(DiagnosticImpl::ReturnOutsideFunction, return_stmt.line);
            return;
        }
    };

    let expected = match type_checker.symbols.function_signature_mut(&function) {
        Some(signature) => {
            signature.has_returned = true;
            signature.return_type
        }
        None => return,
    };

    if expected != received && !expected.is_unknown() && !received.is_unknown() {
        type_checker.report(
            DiagnosticImpl::ReturnTypeMismatch {
                function,
                expected,
                received,
            },
            return_stmt.line,
        );
    }
}

/// Runs the static pass over a whole program.
pub fn type_check(program: &Program, file: &str) -> TypeChecker {
    let mut type_checker = TypeChecker::new(file);
    type_check_program(&mut type_checker, program);
    type_checker
}
