use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order at the current position; the first match wins. Longer
    /// operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \\t\\x0B\\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^(\\r\\n|\\r|\\n)").unwrap(), handler: separator_handler },
        RegexPattern { regex: Regex::new("(?s)^\"((?:\\\\.|[^\"\\\\])*)(\"?)").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("(?s)^'(?:\\\\(.)|([^'\\\\]))'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: illegal_char_handler },
        RegexPattern { regex: Regex::new("^//[^\\r\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
        RegexPattern { regex: Regex::new("^\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
        RegexPattern { regex: Regex::new("^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: Regex::new("^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
        RegexPattern { regex: Regex::new("^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^=>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::FatArrow, "=>") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    /// Byte offset into `source`.
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Moves `n` bytes forward, keeping the line and column counters in step
    /// with every code point passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        let text = &self.source[self.pos..end];

        let (mut line, mut column) = (self.line, self.column);
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\r' | '\n' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }

        self.line = line;
        self.column = column;
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error, position));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| String::from(m.as_str()))
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn separator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let value = matched.replace('\r', "\\r").replace('\n', "\\n");

    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();

    lexer.push(MK_TOKEN!(TokenKind::Separator, value, Span { start, end }));
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);

    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched, Span { start, end }));

    // A literal holds at most one '.'; scanning resumes at the extra one.
    if lexer.at() == Some('.') {
        let position = lexer.position();
        lexer.error(ErrorImpl::IllegalNumber, position);
    }
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let start = lexer.position();

    let (length, body, terminated) = match regex.captures(lexer.remainder()) {
        Some(captures) => (
            captures.get(0).map_or(0, |m| m.end()),
            captures.get(1).map_or("", |m| m.as_str()).to_string(),
            captures.get(2).is_some_and(|m| !m.as_str().is_empty()),
        ),
        None => (0, String::new(), false),
    };

    if !terminated {
        lexer.error(ErrorImpl::UnterminatedString, start);
        let rest = lexer.remainder().len();
        lexer.advance_n(rest);
        return;
    }

    lexer.advance_n(length);
    let end = lexer.position();

    lexer.push(MK_TOKEN!(TokenKind::String, unescape(&body), Span { start, end }));
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let start = lexer.position();

    let (length, value) = match regex.captures(lexer.remainder()) {
        Some(captures) => (
            captures.get(0).map_or(0, |m| m.end()),
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .map_or("", |m| m.as_str())
                .to_string(),
        ),
        None => (0, String::new()),
    };

    lexer.advance_n(length);
    let end = lexer.position();

    lexer.push(MK_TOKEN!(TokenKind::Char, value, Span { start, end }));
}

fn illegal_char_handler(lexer: &mut Lexer, _regex: &Regex) {
    let start = lexer.position();
    lexer.error(ErrorImpl::IllegalChar, start);
    lexer.advance_n(1);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_n(value.len());
    let end = lexer.position();

    lexer.push(MK_TOKEN!(kind, value, Span { start, end }));
}

/// A backslash copies the code point after it verbatim; nothing else is
/// translated.
fn unescape(body: &str) -> String {
    let mut result = String::new();
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.next() {
                result.push(next_ch);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Converts source text into tokens, ending with a single `EOF` token.
///
/// Lexical errors do not stop the scan. Every error found in the source is
/// returned together, and no tokens are returned when there is at least one.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Vec<Error>> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            let start = lex.position();
            let ch = lex.at().unwrap_or_default();
            lex.error(ErrorImpl::IllegalToken { token: ch.to_string() }, start);
            lex.advance_n(ch.len_utf8());
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("End"), Span::at(position)));

    if !lex.errors.is_empty() {
        return Err(lex.errors);
    }

    Ok(lex.tokens)
}
