use std::{collections::HashMap, fmt::Display};

use crate::{ast::types::Type, errors::errors::SymbolError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeLabel {
    Global,
    Function(String),
    Loop,
    Block,
}

impl Display for ScopeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeLabel::Global => write!(f, "global"),
            ScopeLabel::Function(name) => write!(f, "function:{}", name),
            ScopeLabel::Loop => write!(f, "loop"),
            ScopeLabel::Block => write!(f, "block"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub return_type: Type,
    pub parameters: Vec<Type>,
    /// Set once a return statement for this function has been checked.
    pub has_returned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable(Type),
    Function(FunctionSignature),
}

#[derive(Debug)]
pub struct Scope {
    pub label: ScopeLabel,
    symbols: HashMap<String, Symbol>,
}

impl Scope {
    pub fn new(label: ScopeLabel) -> Self {
        Scope {
            label,
            symbols: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}

/// Compile time scope chain.
///
/// The first scope is the global one and is never popped. Variables and
/// functions share one namespace.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new(ScopeLabel::Global)],
        }
    }

    pub fn push_scope(&mut self, label: ScopeLabel) {
        self.scopes.push(Scope::new(label));
    }

    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current_scope(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    pub fn is_global_scope(&self) -> bool {
        self.scopes.len() == 1
    }

    pub fn declare(&mut self, name: &str, symbol: Symbol) -> Result<(), SymbolError> {
        if let Symbol::Variable(_) = symbol {
            if let Some(Symbol::Function(_)) = self.scopes[0].get(name) {
                return Err(SymbolError::FunctionNameShadowed {
                    name: name.to_string(),
                });
            }
        }

        let index = self.scopes.len() - 1;
        let scope = &mut self.scopes[index];
        if scope.contains(name) {
            return Err(SymbolError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }

        scope.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&Symbol, SymbolError> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| SymbolError::UndeclaredName {
                name: name.to_string(),
            })
    }

    /// Returns the signature of the nearest function named `name`.
    pub fn function_signature_mut(&mut self, name: &str) -> Option<&mut FunctionSignature> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| match scope.symbols.get_mut(name) {
                Some(Symbol::Function(signature)) => Some(signature),
                _ => None,
            })
    }

    /// Name of the innermost function whose body is being checked.
    pub fn enclosing_function(&self) -> Option<&str> {
        self.scopes.iter().rev().find_map(|scope| match &scope.label {
            ScopeLabel::Function(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Whether a loop scope encloses the current position without crossing
    /// a function boundary.
    pub fn in_loop(&self) -> bool {
        for scope in self.scopes.iter().rev() {
            match scope.label {
                ScopeLabel::Loop => return true,
                ScopeLabel::Function(_) => return false,
                ScopeLabel::Global | ScopeLabel::Block => {}
            }
        }

        false
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
