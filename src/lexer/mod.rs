//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, built-in type names, literals, and operators
//! - Line separators, which are significant in this language
//! - Collecting every lexical error in one pass
//!
//! The `cursor` module provides the replayable token view the parser walks.

pub mod cursor;
pub mod lexer;
pub mod tokens;
