//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::rational::RationalError;
use crate::errors::errors::{Error, ErrorImpl, ErrorPhase, ErrorTip};
use crate::type_checker::type_checker::TypeTag;
use crate::Position;
use std::rc::Rc;

fn position() -> Position {
    Position::new(3, 7, Rc::new("test.ah".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::IllegalNumber, position());

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(error.get_position().file.as_str(), "test.ah");
}

#[test]
fn test_lex_messages() {
    let error = Error::new(ErrorImpl::IllegalNumber, position());
    assert_eq!(error.get_message(), "illegal number");

    let error = Error::new(ErrorImpl::UnterminatedString, position());
    assert_eq!(error.get_message(), "lose a '\"'");

    let error = Error::new(
        ErrorImpl::IllegalToken {
            token: "@".to_string(),
        },
        position(),
    );
    assert_eq!(error.get_message(), "illegal token '@'");
    assert_eq!(error.get_error_name(), "IllegalToken");
    assert_eq!(error.get_phase(), ErrorPhase::Lex);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expecting: "')'".to_string(),
            rule: "Factor".to_string(),
        },
        position(),
    );

    assert_eq!(error.get_message(), "unexpected } expecting ')' -> Factor");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_phase(), ErrorPhase::Parse);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.x".to_string(),
            source: RationalError::InvalidLiteral {
                literal: "1.x".to_string(),
            },
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_phase(), ErrorPhase::Parse);
}

#[test]
fn test_type_conflict_error() {
    let error = Error::new(
        ErrorImpl::TypeConflict {
            left: TypeTag::Number,
            right: TypeTag::Bool,
        },
        position(),
    );

    assert_eq!(error.get_message(), "number cannot be combined with bool");
    assert_eq!(error.get_phase(), ErrorPhase::Type);
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::IllegalNumber, position());
    assert_eq!(error.to_string(), "Error(Lex)[test.ah:3:7]: illegal number");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expecting: "'{'".to_string(),
            rule: "BlockStatement".to_string(),
        },
        position(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("'{'")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
