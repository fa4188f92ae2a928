use std::rc::Rc;

use crate::{Position, Span};

use super::tokens::{Token, TokenKind};

/// A replayable view over a finished token sequence.
///
/// `next` hands out tokens one at a time, `unget` steps back, and
/// `mark`/`rewind` let the parser try one interpretation and fall back to
/// another. Once the end is reached, `next` keeps returning the final
/// `EOF` token, and every step is still counted so that the same number of
/// `unget` calls returns to the same place.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// The sequence should end with an `EOF` token, which is what `tokenize`
    /// produces. An empty sequence gets one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            let position = Position::new(1, 1, Rc::new(String::from("shell")));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("End"),
                span: Span::at(position),
            });
        }

        TokenCursor { tokens, pos: 0 }
    }

    pub fn next(&mut self) -> Token {
        let token = self.peek();
        self.pos += 1;
        token
    }

    /// Steps back one token. Has no effect at the start.
    pub fn unget(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn peek(&self) -> Token {
        self.tokens[self.index()].clone()
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.tokens[self.index()].kind
    }

    pub fn at_end(&self) -> bool {
        self.peek_kind() == TokenKind::EOF
    }

    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self, mark: usize) {
        self.pos = mark;
    }

    fn index(&self) -> usize {
        self.pos.min(self.tokens.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
