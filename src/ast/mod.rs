/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree produced by the parser
///
/// Submodules:
/// - ast: The closed `Stmt` / `Expr` enums and the `Program` root
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
/// - types: Type names and operators
/// - printer: Indented outline rendering of a program
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
