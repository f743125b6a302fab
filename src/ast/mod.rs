/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core node enums, the program root and the borrowed `Node` view
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
/// - types: The static types of the language
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
