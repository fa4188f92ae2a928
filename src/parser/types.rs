//! Type name parsing.
//!
//! A type annotation is a single name: one of the built-in type keywords
//! (`number`, `int`, `int64`, `char`, `string`, `bool`, `list`, `map`) or an
//! identifier naming a user type. Names are kept as written; resolving them
//! is left to later passes.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one type name, reporting `rule` in the error when the current
/// token is not a type.
pub fn parse_type_name(parser: &mut Parser, rule: &str) -> Result<String, Error> {
    let token = parser.advance();

    if token.kind == TokenKind::Identifier || token.kind.is_builtin_type() {
        return Ok(token.value);
    }

    Err(Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
            expecting: String::from("'Type'"),
            rule: String::from(rule),
        },
        token.span.start,
    ))
}
