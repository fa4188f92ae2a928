/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - constants: The de-duplicated literal pool built during parsing
/// - expressions: Arithmetic and boolean expression trees
/// - rational: Exact fractions used for every numeric literal
/// - statements: Definitions for various statement types
pub mod ast;
pub mod constants;
pub mod expressions;
pub mod rational;
pub mod statements;
