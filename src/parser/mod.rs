//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. Each grammar rule is one
//! function, and the parser may look ahead and step back over tokens to
//! choose between rules that start alike. It handles:
//!
//! - Statement parsing (declarations, assignments, calls, control flow)
//! - Arithmetic expressions with two precedence levels
//! - Boolean conditions for `if` and `for`
//! - Type names in declarations
//!
//! The first syntax error ends the parse.

pub mod boolean;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
