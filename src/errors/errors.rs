use std::fmt::Display;

use thiserror::Error;

use crate::{ast::rational::RationalError, type_checker::type_checker::TypeTag, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The diagnostic text shown to users, without position information.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::IllegalNumber
            | ErrorImpl::UnterminatedString
            | ErrorImpl::IllegalChar
            | ErrorImpl::IllegalToken { .. } => ErrorPhase::Lex,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorPhase::Parse
            }
            ErrorImpl::TypeConflict { .. } => ErrorPhase::Type,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalNumber => "IllegalNumber",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::IllegalChar => "IllegalChar",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TypeConflict { .. } => "TypeConflict",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalNumber => ErrorTip::Suggestion(String::from(
                "illegal number, a number literal holds at most one '.'",
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "lose a '\"', the string is never closed",
            )),
            ErrorImpl::IllegalChar => ErrorTip::Suggestion(String::from(
                "illegal char, a char literal holds exactly one character",
            )),
            ErrorImpl::IllegalToken { token } => {
                ErrorTip::Suggestion(format!("illegal token '{}'", token))
            }
            ErrorImpl::UnexpectedToken {
                token, expecting, ..
            } => ErrorTip::Suggestion(format!(
                "found `{}` where {} was expected",
                token, expecting
            )),
            ErrorImpl::NumberParseError { token, .. } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::TypeConflict { left, right } => ErrorTip::Suggestion(format!(
                "`{}` cannot be combined with `{}`, operators are not overloaded",
                left, right
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error({})[{}:{}:{}]: {}",
            self.get_phase(),
            self.position.file,
            self.position.line,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lex,
    Parse,
    Type,
}

impl Display for ErrorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPhase::Lex => write!(f, "Lex"),
            ErrorPhase::Parse => write!(f, "Parser"),
            ErrorPhase::Type => write!(f, "Type"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal number")]
    IllegalNumber,
    #[error("lose a '\"'")]
    UnterminatedString,
    #[error("illegal char")]
    IllegalChar,
    #[error("illegal token '{token}'")]
    IllegalToken { token: String },
    #[error("unexpected {token} expecting {expecting} -> {rule}")]
    UnexpectedToken {
        token: String,
        expecting: String,
        rule: String,
    },
    #[error("error parsing number {token:?}: {source}")]
    NumberParseError {
        token: String,
        #[source]
        source: RationalError,
    },
    #[error("{left} cannot be combined with {right}")]
    TypeConflict { left: TypeTag, right: TypeTag },
}
