//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is recursive descent with one function per grammar rule. It
//! walks a `TokenCursor`, so any rule may look ahead and step back.
//!
//! It maintains lookup tables for:
//! - Statement handlers at the top level
//! - Statement handlers inside blocks (adds `return`, `break`, `continue`)
//!
//! The first error stops the parse.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{constants::ConstantPool, expressions::ExprNode, statements::BlockStmt},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        cursor::TokenCursor,
        tokens::{describe_kinds, Token, TokenKind},
    },
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Replayable view over the tokens being parsed
    cursor: TokenCursor,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Statement handlers for the top level
    stmt_lookup: StmtLookup,
    /// Statement handlers inside a `{ }` block
    block_stmt_lookup: StmtLookup,
    /// Literals seen so far
    constants: ConstantPool,
    /// Counter for generating unique block IDs
    current_id: i32,
}

impl Parser {
    /// Creates a new Parser instance over tokens produced by `tokenize`.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            file,
            stmt_lookup: HashMap::new(),
            block_stmt_lookup: HashMap::new(),
            constants: ConstantPool::new(),
            current_id: 1,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Token {
        self.cursor.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.peek_kind()
    }

    /// Advances to the next token and returns the one passed over.
    pub fn advance(&mut self) -> Token {
        self.cursor.next()
    }

    /// Steps back over the last token taken.
    pub fn unget(&mut self) {
        self.cursor.unget();
    }

    pub fn mark(&self) -> usize {
        self.cursor.mark()
    }

    pub fn rewind(&mut self, mark: usize) {
        self.cursor.rewind(mark);
    }

    /// Builds an `unexpected ... expecting ...` error for `token`.
    pub fn unexpected_token(token: &Token, expecting: &[TokenKind], rule: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                expecting: describe_kinds(expecting),
                rule: String::from(rule),
            },
            token.span.start.clone(),
        )
    }

    /// Builds an `unexpected ... expecting ...` error for the current token.
    pub fn unexpected(&self, expecting: &[TokenKind], rule: &str) -> Error {
        Parser::unexpected_token(&self.current_token(), expecting, rule)
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `rule` - The grammar rule named in the error message
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect(&mut self, expected_kind: TokenKind, rule: &str) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind], rule)
    }

    /// Like `expect`, accepting any of `kinds`.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind], rule: &str) -> Result<Token, Error> {
        if kinds.contains(&self.current_token_kind()) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kinds, rule))
        }
    }

    pub fn skip_separators(&mut self) {
        while self.current_token_kind() == TokenKind::Separator {
            self.advance();
        }
    }

    /// Returns true while real tokens remain before `EOF`.
    pub fn has_tokens(&self) -> bool {
        !self.cursor.at_end()
    }

    /// Returns a reference to the top-level statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the in-block statement lookup table.
    pub fn get_block_stmt_lookup(&self) -> &StmtLookup {
        &self.block_stmt_lookup
    }

    /// Registers a statement handler, valid both at the top level and in blocks.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
        self.block_stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a statement handler that is only valid inside a block.
    pub fn block_stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.block_stmt_lookup.insert(kind, stmt_fn);
    }

    /// Advances the internal ID counter and returns the previous value.
    pub fn advance_id(&mut self) -> i32 {
        let id = self.current_id;
        self.current_id += 1;
        id
    }

    pub fn get_constants(&self) -> &ConstantPool {
        &self.constants
    }

    pub fn get_constants_mut(&mut self) -> &mut ConstantPool {
        &mut self.constants
    }

    /// Consumes the parser, keeping only the literal pool.
    pub fn into_constants(self) -> ConstantPool {
        self.constants
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. Every
/// statement must be followed by a separator or the end of input.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, ending with `EOF`
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, which holds the constant pool
/// - Result containing either the root BlockStmt or the first Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<BlockStmt, Error>) {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let start = Position::new(1, 1, Rc::clone(&parser.file));
    let mut body = vec![];

    while parser.has_tokens() {
        if parser.current_token_kind() == TokenKind::Separator {
            parser.advance();
            continue;
        }

        match parse_stmt(&mut parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => return (parser, Err(error)),
        }

        if let Err(error) =
            parser.expect_one_of(&[TokenKind::Separator, TokenKind::EOF], "Statement")
        {
            return (parser, Err(error));
        }
    }

    let block = Ok(BlockStmt {
        body,
        id: 0,
        span: Span {
            start,
            end: parser.get_position(),
        },
    });

    (parser, block)
}

/// Parses a single arithmetic expression, for tooling that evaluates one
/// expression at a time. Trailing separators are allowed; anything else
/// after the expression is an error.
pub fn parse_expression(tokens: Vec<Token>, file: Rc<String>) -> Result<ExprNode, Error> {
    let mut parser = Parser::new(tokens, file);

    parser.skip_separators();
    let expression = parse_expr(&mut parser)?;
    parser.skip_separators();
    parser.expect(TokenKind::EOF, "Expression")?;

    Ok(expression)
}
