use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::{BoolExpr, FactorNode},
        statements::{
            AssignOp, AssignmentStmt, BlockStmt, BreakStmt, CallStmt, ContinueStmt, ElseIfBranch,
            FieldAssignStmt, FnDeclStmt, ForStmt, IfStmt, IncDecStmt, IndexAssignStmt,
            MethodCallStmt, Parameter, ReturnStmt, TimerStmt, VarDeclKind, VarDeclStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    boolean::parse_bool_expr,
    expr::{parse_call_expr, parse_expr, parse_expression_list, parse_factor},
    lookups::{BLOCK_STATEMENT_STARTS, STATEMENT_STARTS},
    parser::Parser,
    types::parse_type_name,
};

const ASSIGNMENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Assignment,
    TokenKind::PlusEquals,
    TokenKind::MinusEquals,
    TokenKind::StarEquals,
    TokenKind::SlashEquals,
];

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let kind = parser.current_token_kind();
    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(STATEMENT_STARTS, "Statement")),
    }
}

fn parse_block_body_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let kind = parser.current_token_kind();
    match parser.get_block_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(BLOCK_STATEMENT_STARTS, "BlockStatement")),
    }
}

/// `{` statements separated by separators `}`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser
        .expect(TokenKind::OpenCurly, "BlockStatement")?
        .span
        .start;

    let mut body = Vec::new();
    loop {
        parser.skip_separators();

        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected(&[TokenKind::CloseCurly], "BlockStatement")),
            _ => {}
        }

        body.push(parse_block_body_stmt(parser)?);

        if !matches!(
            parser.current_token_kind(),
            TokenKind::Separator | TokenKind::CloseCurly
        ) {
            return Err(parser.unexpected(
                &[TokenKind::Separator, TokenKind::CloseCurly],
                "BlockStatement",
            ));
        }
    }

    let end = parser.advance().span.end;

    Ok(BlockStmt {
        body,
        id: parser.advance_id(),
        span: Span { start, end },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

/// `func name ( [var p -> Type {, var p -> Type}] ) -> Type {, Type} Block`
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let identifier = parser.expect(TokenKind::Identifier, "FuncStatement")?.value;

    parser.expect(TokenKind::OpenParen, "FuncStatement")?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_parameter(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen, "FuncStatement")?;
    parser.expect(TokenKind::Arrow, "FuncStatement")?;

    let mut return_types = vec![parse_type_name(parser, "FuncReturnType")?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        return_types.push(parse_type_name(parser, "FuncReturnType")?);
    }

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(FnDeclStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        identifier,
        parameters,
        return_types,
        body,
    }))
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    parser.expect(TokenKind::Var, "FuncParameter")?;
    let name = parser.expect(TokenKind::Identifier, "FuncParameter")?.value;
    parser.expect(TokenKind::Arrow, "FuncParameter")?;
    let type_name = parse_type_name(parser, "FuncParameter")?;

    Ok(Parameter { name, type_name })
}

/// `var name -> Type` or `var a, b = x, y`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let identifier = parser.expect(TokenKind::Identifier, "VarStatement")?.value;

    let kind = match parser.current_token_kind() {
        TokenKind::Arrow => {
            parser.advance();
            let type_name = parse_type_name(parser, "VarStatement")?;
            VarDeclKind::Typed {
                identifier,
                type_name,
            }
        }
        TokenKind::Assignment | TokenKind::Comma => {
            parser.unget();
            let assignment = parse_assignment(parser, &[TokenKind::Assignment])?;
            VarDeclKind::Assigned(assignment)
        }
        _ => {
            return Err(parser.unexpected(
                &[TokenKind::Arrow, TokenKind::Assignment, TokenKind::Comma],
                "VarStatement",
            ))
        }
    };

    Ok(StmtWrapper::new(VarDeclStmt {
        kind,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// `WORD {, WORD} op Expression {, Expression}` where `op` is one of
/// `operators`. A compound operator takes exactly one target.
fn parse_assignment(parser: &mut Parser, operators: &[TokenKind]) -> Result<AssignmentStmt, Error> {
    let first = parser.expect(TokenKind::Identifier, "AssignmentStatement")?;
    let start = first.span.start;

    let mut targets = vec![first.value];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        targets.push(
            parser
                .expect(TokenKind::Identifier, "AssignmentStatement")?
                .value,
        );
    }

    if targets.len() > 1 && parser.current_token_kind() != TokenKind::Assignment {
        return Err(parser.unexpected(
            &[TokenKind::Comma, TokenKind::Assignment],
            "AssignmentStatement",
        ));
    }

    let operator = match parser.expect_one_of(operators, "AssignmentStatement")?.kind {
        TokenKind::PlusEquals => AssignOp::AddAssign,
        TokenKind::MinusEquals => AssignOp::SubAssign,
        TokenKind::StarEquals => AssignOp::MulAssign,
        TokenKind::SlashEquals => AssignOp::DivAssign,
        _ => AssignOp::Assign,
    };

    let values = parse_expression_list(parser)?;

    Ok(AssignmentStmt {
        targets,
        operator,
        values,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

/// A statement starting with an identifier. The token after it decides the
/// form; both are put back before the chosen rule runs.
pub fn parse_word_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let first = parser.advance();
    let second = parser.advance();
    parser.unget();
    parser.unget();

    match second.kind {
        TokenKind::OpenParen => {
            let call = parse_call_expr(parser)?;
            Ok(StmtWrapper::new(CallStmt {
                span: Span {
                    start: first.span.start,
                    end: parser.get_position(),
                },
                call,
            }))
        }
        TokenKind::Assignment
        | TokenKind::Comma
        | TokenKind::PlusEquals
        | TokenKind::MinusEquals
        | TokenKind::StarEquals
        | TokenKind::SlashEquals => Ok(StmtWrapper::new(parse_assignment(
            parser,
            ASSIGNMENT_OPERATORS,
        )?)),
        TokenKind::Dot | TokenKind::OpenBracket => parse_access_stmt(parser),
        TokenKind::PlusPlus | TokenKind::MinusMinus => {
            let identifier = parser.advance();
            let operator = parser.advance();

            Ok(StmtWrapper::new(IncDecStmt {
                identifier: identifier.value,
                is_increment: operator.kind == TokenKind::PlusPlus,
                span: Span {
                    start: identifier.span.start,
                    end: operator.span.end,
                },
            }))
        }
        _ => Err(Parser::unexpected_token(
            &second,
            &[
                TokenKind::OpenParen,
                TokenKind::Assignment,
                TokenKind::Comma,
                TokenKind::PlusEquals,
                TokenKind::MinusEquals,
                TokenKind::StarEquals,
                TokenKind::SlashEquals,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::Dot,
                TokenKind::OpenBracket,
            ],
            "WordStatement",
        )),
    }
}

/// `t.a = 1`, `t["a"] = 1` or `t.f(1)`. The left side is read as a factor
/// and its outermost access decides the statement.
fn parse_access_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.current_token().span.start;
    let target = parse_factor(parser)?;
    let assigning = parser.current_token_kind() == TokenKind::Assignment;

    match target {
        FactorNode::MethodCall {
            callee, arguments, ..
        } => Ok(StmtWrapper::new(MethodCallStmt {
            callee: *callee,
            arguments,
            span: Span {
                start,
                end: parser.get_position(),
            },
        })),
        FactorNode::FieldAccess { object, field, .. } if assigning => {
            parser.advance();
            let value = parse_expr(parser)?;

            Ok(StmtWrapper::new(FieldAssignStmt {
                object: *object,
                field,
                value,
                span: Span {
                    start,
                    end: parser.get_position(),
                },
            }))
        }
        FactorNode::IndexAccess { object, index, .. } if assigning => {
            parser.advance();
            let value = parse_expr(parser)?;

            Ok(StmtWrapper::new(IndexAssignStmt {
                object: *object,
                index: *index,
                value,
                span: Span {
                    start,
                    end: parser.get_position(),
                },
            }))
        }
        _ => Err(parser.unexpected(
            &[TokenKind::Assignment, TokenKind::OpenParen],
            "WordStatement",
        )),
    }
}

/// `if ( Bool ) Block { elseif ( Bool ) Block } [ else Block ]`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let (condition, body) = parse_condition_and_block(parser, "IfStatement")?;

    let mut else_ifs = Vec::new();
    let mut else_body = None;

    loop {
        // The chain may continue on a later line.
        let mark = parser.mark();
        parser.skip_separators();

        match parser.current_token_kind() {
            TokenKind::ElseIf => {
                parser.advance();
                let (condition, body) = parse_condition_and_block(parser, "ElseIfStatement")?;
                else_ifs.push(ElseIfBranch { condition, body });
            }
            TokenKind::Else => {
                parser.advance();
                else_body = Some(parse_block(parser)?);
                break;
            }
            _ => {
                parser.rewind(mark);
                break;
            }
        }
    }

    Ok(StmtWrapper::new(IfStmt {
        condition,
        body,
        else_ifs,
        else_body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

fn parse_condition_and_block(
    parser: &mut Parser,
    rule: &str,
) -> Result<(BoolExpr, BlockStmt), Error> {
    parser.expect(TokenKind::OpenParen, rule)?;
    let condition = parse_bool_expr(parser)?;
    parser.expect(TokenKind::CloseParen, rule)?;
    let body = parse_block(parser)?;

    Ok((condition, body))
}

/// `for ( init? ; condition? ; step? ) Block`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen, "ForStatement")?;

    let init = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_for_clause(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "ForStatement")?;

    let condition = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_bool_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "ForStatement")?;

    let step = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        Some(parse_for_clause(parser)?)
    };
    parser.expect(TokenKind::CloseParen, "ForStatement")?;

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(ForStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        init,
        condition,
        step,
        body,
    }))
}

fn parse_for_clause(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Var => parse_var_decl_stmt(parser),
        TokenKind::Identifier => parse_word_stmt(parser),
        _ => Err(parser.unexpected(
            &[TokenKind::Var, TokenKind::Identifier, TokenKind::Semicolon],
            "ForStatement",
        )),
    }
}

/// `return [Expression {, Expression}]`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let values = match parser.current_token_kind() {
        TokenKind::Separator | TokenKind::CloseCurly | TokenKind::EOF => vec![],
        _ => parse_expression_list(parser)?,
    };

    Ok(StmtWrapper::new(ReturnStmt {
        values,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// `timer Block`; the block may start on the next line.
pub fn parse_timer_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;
    parser.skip_separators();
    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(TimerStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        body,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span;
    Ok(StmtWrapper::new(BreakStmt { span }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span;
    Ok(StmtWrapper::new(ContinueStmt { span }))
}
