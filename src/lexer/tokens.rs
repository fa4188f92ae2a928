use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("elseif", TokenKind::ElseIf);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("return", TokenKind::Return);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("new", TokenKind::New);
        map.insert("timer", TokenKind::Timer);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);

        // Built-in type names
        map.insert("number", TokenKind::NumberType);
        map.insert("int", TokenKind::IntType);
        map.insert("int64", TokenKind::Int64Type);
        map.insert("char", TokenKind::CharType);
        map.insert("string", TokenKind::StringType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("list", TokenKind::ListType);
        map.insert("map", TokenKind::MapType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// `\n`, `\r` or `\r\n`; separates statements.
    Separator,

    Number,
    String,
    Char,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Ampersand, // &
    And,       // &&
    Pipe,      // |
    Or,        // ||

    Dot,
    Semicolon,
    Colon,
    Comma,
    Arrow,    // ->
    FatArrow, // =>

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Caret,   // ^
    Percent, // %
    Tilde,   // ~

    // Reserved
    Func,
    Var,
    If,
    ElseIf,
    Else,
    For,
    Break,
    Continue,
    Return,
    Switch,
    Case,
    New,
    Timer,
    True,
    False,

    // Built-in types
    NumberType,
    IntType,
    Int64Type,
    CharType,
    StringType,
    BoolType,
    ListType,
    MapType,
}

impl TokenKind {
    pub fn is_builtin_type(&self) -> bool {
        matches!(
            self,
            TokenKind::NumberType
                | TokenKind::IntType
                | TokenKind::Int64Type
                | TokenKind::CharType
                | TokenKind::StringType
                | TokenKind::BoolType
                | TokenKind::ListType
                | TokenKind::MapType
        )
    }

    /// How the kind is written in an "expecting ..." list.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "'End'",
            TokenKind::Separator => "'\\n'",
            TokenKind::Number => "'num'",
            TokenKind::String => "'string'",
            TokenKind::Char => "'char'",
            TokenKind::Identifier => "'WORD'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::OpenCurly => "'{'",
            TokenKind::CloseCurly => "'}'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Assignment => "'='",
            TokenKind::Equals => "'=='",
            TokenKind::Not => "'!'",
            TokenKind::NotEquals => "'!='",
            TokenKind::Less => "'<'",
            TokenKind::LessEquals => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEquals => "'>='",
            TokenKind::Ampersand => "'&'",
            TokenKind::And => "'&&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Or => "'||'",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Arrow => "'->'",
            TokenKind::FatArrow => "'=>'",
            TokenKind::PlusPlus => "'++'",
            TokenKind::MinusMinus => "'--'",
            TokenKind::PlusEquals => "'+='",
            TokenKind::MinusEquals => "'-='",
            TokenKind::SlashEquals => "'/='",
            TokenKind::StarEquals => "'*='",
            TokenKind::Plus => "'+'",
            TokenKind::Dash => "'-'",
            TokenKind::Slash => "'/'",
            TokenKind::Star => "'*'",
            TokenKind::Caret => "'^'",
            TokenKind::Percent => "'%'",
            TokenKind::Tilde => "'~'",
            TokenKind::Func => "'func'",
            TokenKind::Var => "'var'",
            TokenKind::If => "'if'",
            TokenKind::ElseIf => "'elseif'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::Break => "'break'",
            TokenKind::Continue => "'continue'",
            TokenKind::Return => "'return'",
            TokenKind::Switch => "'switch'",
            TokenKind::Case => "'case'",
            TokenKind::New => "'new'",
            TokenKind::Timer => "'timer'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::NumberType => "'number'",
            TokenKind::IntType => "'int'",
            TokenKind::Int64Type => "'int64'",
            TokenKind::CharType => "'char'",
            TokenKind::StringType => "'string'",
            TokenKind::BoolType => "'bool'",
            TokenKind::ListType => "'list'",
            TokenKind::MapType => "'map'",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Joins kinds into the `'a' || 'b'` form used by parse errors.
pub fn describe_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.describe())
        .collect::<Vec<&str>>()
        .join(" || ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}
