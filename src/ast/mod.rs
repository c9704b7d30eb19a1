/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Stmt` and `Expr` sums and their rendering
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - types: Definitions for type annotations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
