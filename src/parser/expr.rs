use crate::{
    ast::{
        expressions::{
            AddOp, CallExpr, ClosureBody, ClosureExpr, ClosureParam, ExprNode, FactorNode, MulOp,
            TableEntry, TermNode,
        },
        rational::Rational,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_block, types::parse_type_name};

const FACTOR_STARTS: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::True,
    TokenKind::False,
    TokenKind::String,
    TokenKind::Char,
    TokenKind::OpenParen,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::OpenCurly,
    TokenKind::Pipe,
    TokenKind::Or,
];

/// `Term (('+' | '-') Term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<ExprNode, Error> {
    let mut left = ExprNode::Term(parse_term(parser)?);

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Plus => AddOp::Add,
            TokenKind::Dash => AddOp::Sub,
            _ => break,
        };
        let operator = parser.advance();
        let right = parse_term(parser)?;

        left = ExprNode::Binary {
            op,
            left: Box::new(left),
            right,
            line: operator.line(),
            column: operator.column(),
        };
    }

    Ok(left)
}

/// `Factor (('*' | '/' | '^' | '%' | '~') Factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<TermNode, Error> {
    let mut left = TermNode::Factor(parse_factor(parser)?);

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Star => MulOp::Mul,
            TokenKind::Slash => MulOp::Div,
            TokenKind::Caret => MulOp::Pow,
            TokenKind::Percent => MulOp::Mod,
            TokenKind::Tilde => MulOp::Rand,
            _ => break,
        };
        let operator = parser.advance();
        let right = parse_factor(parser)?;

        left = TermNode::Binary {
            op,
            left: Box::new(left),
            right,
            line: operator.line(),
            column: operator.column(),
        };
    }

    Ok(left)
}

/// A primary factor followed by any number of `.field`, `[index]` and, on
/// those, `(arguments)`.
pub fn parse_factor(parser: &mut Parser) -> Result<FactorNode, Error> {
    let mut factor = parse_primary(parser)?;

    loop {
        match parser.current_token_kind() {
            TokenKind::Dot => {
                let line = parser.advance().line();
                let field = parser.expect(TokenKind::Identifier, "Factor")?.value;

                factor = FactorNode::FieldAccess {
                    object: Box::new(factor),
                    field,
                    line,
                };
            }
            TokenKind::OpenBracket => {
                let line = parser.advance().line();
                let index = parse_expr(parser)?;
                parser.expect(TokenKind::CloseBracket, "Factor")?;

                factor = FactorNode::IndexAccess {
                    object: Box::new(factor),
                    index: Box::new(index),
                    line,
                };
            }
            TokenKind::OpenParen
                if matches!(
                    factor,
                    FactorNode::FieldAccess { .. }
                        | FactorNode::IndexAccess { .. }
                        | FactorNode::MethodCall { .. }
                ) =>
            {
                let line = parser.current_token().line();
                let arguments = parse_arguments(parser, "Factor")?;

                factor = FactorNode::MethodCall {
                    callee: Box::new(factor),
                    arguments,
                    line,
                };
            }
            _ => break,
        }
    }

    Ok(factor)
}

fn parse_primary(parser: &mut Parser) -> Result<FactorNode, Error> {
    let token = parser.advance();
    let line = token.line();

    match token.kind {
        TokenKind::Number => {
            let value = Rational::from_literal(&token.value).map_err(|source| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                        source,
                    },
                    token.span.start.clone(),
                )
            })?;
            parser.get_constants_mut().add_number(&value);

            Ok(FactorNode::Number { value, line })
        }
        TokenKind::True | TokenKind::False => Ok(FactorNode::Bool {
            value: token.kind == TokenKind::True,
            line,
        }),
        TokenKind::String => {
            parser.get_constants_mut().add_string(&token.value);
            Ok(FactorNode::String {
                value: token.value,
                line,
            })
        }
        TokenKind::Char => Ok(FactorNode::Char {
            value: token.value,
            line,
        }),
        TokenKind::OpenParen => {
            let expression = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "Factor")?;

            Ok(FactorNode::Paren {
                expression: Box::new(expression),
                line,
            })
        }
        TokenKind::OpenCurly => {
            parser.unget();
            parse_table(parser)
        }
        TokenKind::Pipe | TokenKind::Or => {
            parser.unget();
            Ok(FactorNode::Closure(parse_closure(parser)?))
        }
        TokenKind::PlusPlus => Ok(FactorNode::PreIncrement {
            name: parser.expect(TokenKind::Identifier, "Factor")?.value,
            line,
        }),
        TokenKind::MinusMinus => Ok(FactorNode::PreDecrement {
            name: parser.expect(TokenKind::Identifier, "Factor")?.value,
            line,
        }),
        TokenKind::Identifier => match parser.current_token_kind() {
            TokenKind::PlusPlus => {
                parser.advance();
                Ok(FactorNode::PostIncrement {
                    name: token.value,
                    line,
                })
            }
            TokenKind::MinusMinus => {
                parser.advance();
                Ok(FactorNode::PostDecrement {
                    name: token.value,
                    line,
                })
            }
            TokenKind::OpenParen => {
                parser.unget();
                Ok(FactorNode::Call(parse_call_expr(parser)?))
            }
            _ => Ok(FactorNode::Variable {
                name: token.value,
                line,
            }),
        },
        _ => Err(Parser::unexpected_token(&token, FACTOR_STARTS, "Factor")),
    }
}

/// `WORD ( [Expression {, Expression}] )`
pub fn parse_call_expr(parser: &mut Parser) -> Result<CallExpr, Error> {
    let name = parser.expect(TokenKind::Identifier, "CallStatement")?;
    let arguments = parse_arguments(parser, "CallStatement")?;

    Ok(CallExpr {
        line: name.line(),
        name: name.value,
        arguments,
    })
}

/// `( [Expression {, Expression}] )`
fn parse_arguments(parser: &mut Parser, rule: &str) -> Result<Vec<ExprNode>, Error> {
    parser.expect(TokenKind::OpenParen, rule)?;

    let arguments = if parser.current_token_kind() == TokenKind::CloseParen {
        vec![]
    } else {
        parse_expression_list(parser)?
    };

    parser.expect(TokenKind::CloseParen, rule)?;
    Ok(arguments)
}

/// `{ key: Expression, ... }`. Entries may sit on separate lines and a
/// trailing comma is allowed.
fn parse_table(parser: &mut Parser) -> Result<FactorNode, Error> {
    let line = parser.expect(TokenKind::OpenCurly, "TableLiteral")?.line();
    let mut entries = Vec::new();

    parser.skip_separators();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let key = parser.expect(TokenKind::Identifier, "TableLiteral")?.value;
        parser.expect(TokenKind::Colon, "TableLiteral")?;
        let value = parse_expr(parser)?;
        entries.push(TableEntry { key, value });

        parser.skip_separators();
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
        parser.skip_separators();
    }

    parser.expect(TokenKind::CloseCurly, "TableLiteral")?;
    Ok(FactorNode::Table { entries, line })
}

/// `|a, b -> Type| => Expression`, `|| => Block`
fn parse_closure(parser: &mut Parser) -> Result<ClosureExpr, Error> {
    let opening = parser.expect_one_of(&[TokenKind::Pipe, TokenKind::Or], "Closure")?;
    let mut parameters = Vec::new();

    // `||` is an empty parameter list
    if opening.kind == TokenKind::Pipe {
        if parser.current_token_kind() != TokenKind::Pipe {
            loop {
                let name = parser.expect(TokenKind::Identifier, "Closure")?.value;
                let type_name = if parser.current_token_kind() == TokenKind::Arrow {
                    parser.advance();
                    Some(parse_type_name(parser, "Closure")?)
                } else {
                    None
                };
                parameters.push(ClosureParam { name, type_name });

                if parser.current_token_kind() != TokenKind::Comma {
                    break;
                }
                parser.advance();
            }
        }
        parser.expect(TokenKind::Pipe, "Closure")?;
    }

    parser.expect(TokenKind::FatArrow, "Closure")?;

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        ClosureBody::Block(parse_block(parser)?)
    } else {
        ClosureBody::Expression(Box::new(parse_expr(parser)?))
    };

    Ok(ClosureExpr {
        parameters,
        body,
        line: opening.line(),
    })
}

/// `Expression {, Expression}`, shared by assignments, returns and call
/// arguments.
pub fn parse_expression_list(parser: &mut Parser) -> Result<Vec<ExprNode>, Error> {
    let mut expressions = vec![parse_expr(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        expressions.push(parse_expr(parser)?);
    }

    Ok(expressions)
}
