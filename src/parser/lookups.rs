use std::collections::HashMap;

use crate::{ast::ast::StmtWrapper, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;

/// Tokens that may begin a top-level statement, in the order they are listed
/// in error messages.
pub const STATEMENT_STARTS: &[TokenKind] = &[
    TokenKind::Func,
    TokenKind::Var,
    TokenKind::OpenParen,
    TokenKind::OpenCurly,
    TokenKind::Identifier,
    TokenKind::Separator,
    TokenKind::For,
    TokenKind::If,
    TokenKind::Timer,
];

/// Tokens that may begin a statement inside a block.
pub const BLOCK_STATEMENT_STARTS: &[TokenKind] = &[
    TokenKind::Func,
    TokenKind::Var,
    TokenKind::OpenParen,
    TokenKind::OpenCurly,
    TokenKind::Identifier,
    TokenKind::Separator,
    TokenKind::For,
    TokenKind::If,
    TokenKind::Timer,
    TokenKind::Return,
    TokenKind::Break,
    TokenKind::Continue,
];

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Func, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    // A block needs '{'; '(' reaches the block rule so the error names it.
    parser.stmt(TokenKind::OpenParen, parse_block_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Identifier, parse_word_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Timer, parse_timer_stmt);

    parser.block_stmt(TokenKind::Return, parse_return_stmt);
    parser.block_stmt(TokenKind::Break, parse_break_stmt);
    parser.block_stmt(TokenKind::Continue, parse_continue_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
