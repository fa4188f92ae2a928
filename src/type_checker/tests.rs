//! Unit tests for the type checker.

use std::rc::Rc;

use super::type_checker::{check_type, type_check, TypeTag};
use crate::{
    errors::errors::{Error, ErrorImpl, ErrorPhase},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_expression},
};

fn check(source: &str) -> Result<TypeTag, Error> {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let expression = parse_expression(tokens, Rc::new("shell".to_string())).unwrap();
    check_type(&expression, Rc::new("shell".to_string()))
}

fn check_program(source: &str) -> Result<(), Error> {
    let tokens = tokenize(source.to_string(), Some("test.ah".to_string())).unwrap();
    let (_, ast) = parse(tokens, Rc::new("test.ah".to_string()));
    type_check(&ast.unwrap())
}

fn conflict(left: TypeTag, right: TypeTag) -> ErrorImpl {
    ErrorImpl::TypeConflict { left, right }
}

#[test]
fn test_leaf_types() {
    assert_eq!(check("1"), Ok(TypeTag::Number));
    assert_eq!(check("true"), Ok(TypeTag::Bool));
    assert_eq!(check("\"s\""), Ok(TypeTag::String));
    assert_eq!(check("'c'"), Ok(TypeTag::Char));
    assert_eq!(check("x"), Ok(TypeTag::Unresolved));
    assert_eq!(check("f(1)"), Ok(TypeTag::Unresolved));
    assert_eq!(check("i++"), Ok(TypeTag::Unresolved));
}

#[test]
fn test_number_with_bool_is_rejected() {
    let error = check("1 + true").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &conflict(TypeTag::Number, TypeTag::Bool)
    );
    assert_eq!(error.get_message(), "number cannot be combined with bool");
    assert_eq!(error.get_phase(), ErrorPhase::Type);
}

#[test]
fn test_number_with_string_is_rejected() {
    let error = check("1 + \"x\"").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &conflict(TypeTag::Number, TypeTag::String)
    );
}

#[test]
fn test_conflicts_in_either_order() {
    assert_eq!(
        check("true * 2").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Bool, TypeTag::Number)
    );
    assert_eq!(
        check("'c' - 1").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Char, TypeTag::Number)
    );
    assert_eq!(
        check("2 ~ 'c'").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Number, TypeTag::Char)
    );
}

#[test]
fn test_chain_takes_left_most_type() {
    assert_eq!(check("\"a\" + \"b\""), Ok(TypeTag::String));
    assert_eq!(check("true + \"x\""), Ok(TypeTag::Bool));
    assert_eq!(check("x + 1"), Ok(TypeTag::Unresolved));
    assert_eq!(check("1 + x * 2"), Ok(TypeTag::Number));
    assert_eq!(check("x + 1 + 2"), Ok(TypeTag::Unresolved));
}

#[test]
fn test_parenthesised_types() {
    assert_eq!(check("(1 + 2) * 3"), Ok(TypeTag::Number));
    assert_eq!(
        check("(true) + 1").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Bool, TypeTag::Number)
    );
    assert!(check("2 * (1 + true)").is_err());
}

#[test]
fn test_conflict_deep_in_chain() {
    // `true` is compared with its neighbour `2`
    assert_eq!(
        check("1 + 2 + true").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Number, TypeTag::Bool)
    );
    assert!(check("f(1 + true)").is_err());
}

#[test]
fn test_program_checks_every_expression() {
    assert!(check_program("a = 1\nb = \"s\" + \"t\"\nf(a, 2 * 3)").is_ok());

    let error = check_program("a = 1\nb = 2 + true").unwrap_err();
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().file.as_str(), "test.ah");
}

#[test]
fn test_program_checks_nested_statements() {
    assert!(check_program("func f() -> number {\n    if (a > 1 + true) {\n    }\n}").is_err());
    assert!(check_program("for (i = 1 + \"s\";;) {\n}").is_err());
    assert!(check_program("for (;;) {\n    return 1, 'c' * 1\n}").is_err());
    assert!(check_program("if (a > 1) {\n} else {\n    var b = true * 1\n}").is_err());
    assert!(check_program("{\n    {\n        x += 1 + false\n    }\n}").is_err());
}

#[test]
fn test_neighbouring_operands_are_compared() {
    let error = check("x + true + 1").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &conflict(TypeTag::Bool, TypeTag::Number)
    );

    assert_eq!(
        check("x * true * 1").unwrap_err().get_internal_error(),
        &conflict(TypeTag::Bool, TypeTag::Number)
    );
    assert_eq!(
        check("x - \"s\" ~ 2 + 1").unwrap_err().get_internal_error(),
        &conflict(TypeTag::String, TypeTag::Number)
    );

    // no two neighbours conflict
    assert_eq!(check("1 + x + true"), Ok(TypeTag::Number));
    assert_eq!(check("1 * x * \"s\""), Ok(TypeTag::Number));
}

#[test]
fn test_parenthesised_operand_uses_its_first_term() {
    assert_eq!(check("(true + x) + \"s\""), Ok(TypeTag::Bool));
    assert!(check("(x + true) + 1").is_ok());
    assert!(check("1 + (true + x)").is_err());
}

#[test]
fn test_conflict_reports_operator_column() {
    let error = check("x + true + 1").unwrap_err();
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 10);

    let error = check_program("a = 1\nb = 2 * 3 ~ false").unwrap_err();
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 11);
}

#[test]
fn test_closures_and_tables_are_unresolved() {
    assert_eq!(check("|x| => x + 1"), Ok(TypeTag::Unresolved));
    assert_eq!(check("{a: 1, b: true}"), Ok(TypeTag::Unresolved));
    assert_eq!(check("t.a"), Ok(TypeTag::Unresolved));
    assert_eq!(check("t[1]"), Ok(TypeTag::Unresolved));
    assert_eq!(check("t.f(1)"), Ok(TypeTag::Unresolved));
    assert_eq!(check("1 + t.a + true"), Ok(TypeTag::Number));
}

#[test]
fn test_conflicts_inside_new_forms_are_found() {
    assert!(check("|x| => 1 + true").is_err());
    assert!(check("{a: 'c' * 2}").is_err());
    assert!(check("t[1 + \"s\"]").is_err());
    assert!(check("t.f(true - 1)").is_err());

    assert!(check_program("var f = || => {\n    return 1 + false\n}").is_err());
    assert!(check_program("timer {\n    a = 1 + true\n}").is_err());
    assert!(check_program("t.a = 1 + true").is_err());
    assert!(check_program("t[true * 1] = 1").is_err());
    assert!(check_program("t.f(2 / \"s\")").is_err());
    assert!(check_program("timer {\n    t.a = {b: 1}\n    t.f(|| => 1)\n}").is_ok());
}
