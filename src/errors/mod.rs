//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by every phase:
//!
//! - Error structures with source position information
//! - Specific error variants for the lex, parse and type phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
