//! Token-building macros for the lexer's pattern table.
//!
//! - `MK_TOKEN!` builds a `Token` from its three fields
//! - `MK_DEFAULT_HANDLER!` builds the handler for an operator or delimiter
//!   whose text never varies

/// Builds a `Token`. `Token` must be in scope at the call site.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Expands to a handler that pushes a `$kind` token holding `$value` and
/// moves the lexer past it. `$value` must not contain a line break, since
/// only its byte length is used to advance.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^~").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let start = lexer.position();
            lexer.advance_n($value.len());
            let end = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from($value), Span { start, end }));
        }
    };
}
