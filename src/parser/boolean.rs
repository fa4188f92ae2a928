use crate::{
    ast::expressions::{BoolExpr, CompareOp, LogicalOp},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// `BoolFactor (('&&' | '||') BoolFactor)*`, one precedence level.
pub fn parse_bool_expr(parser: &mut Parser) -> Result<BoolExpr, Error> {
    let mut left = parse_bool_factor(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::And => LogicalOp::And,
            TokenKind::Or => LogicalOp::Or,
            _ => break,
        };
        let line = parser.advance().line();
        let right = parse_bool_factor(parser)?;

        left = BoolExpr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line,
        };
    }

    Ok(left)
}

fn is_comparison(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Greater | TokenKind::Less | TokenKind::GreaterEquals | TokenKind::LessEquals
    )
}

/// A parenthesised boolean, or `Expression op Expression`.
///
/// `(` may open either a boolean group or an arithmetic operand such as
/// `(a + 1) > 2`. The group is tried first; if it fails, or a comparison
/// follows the closing `)`, the cursor goes back and the comparison form is
/// parsed instead.
fn parse_bool_factor(parser: &mut Parser) -> Result<BoolExpr, Error> {
    if parser.current_token_kind() == TokenKind::OpenParen {
        let mark = parser.mark();
        parser.advance();

        if let Ok(inner) = parse_bool_expr(parser) {
            if parser.current_token_kind() == TokenKind::CloseParen {
                parser.advance();
                if !is_comparison(parser.current_token_kind()) {
                    return Ok(BoolExpr::Grouped(Box::new(inner)));
                }
            }
        }

        parser.rewind(mark);
    }

    let line = parser.current_token().line();
    let left = parse_expr(parser)?;

    let op = match parser.current_token_kind() {
        TokenKind::Greater => CompareOp::Greater,
        TokenKind::Less => CompareOp::Less,
        TokenKind::GreaterEquals => CompareOp::GreaterEquals,
        TokenKind::LessEquals => CompareOp::LessEquals,
        _ => {
            return Err(parser.unexpected(
                &[
                    TokenKind::OpenParen,
                    TokenKind::Greater,
                    TokenKind::Less,
                    TokenKind::GreaterEquals,
                    TokenKind::LessEquals,
                ],
                "BooleanFactor",
            ))
        }
    };
    parser.advance();

    let right = parse_expr(parser)?;

    Ok(BoolExpr::Comparison {
        left,
        op,
        right,
        line,
    })
}
