//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Variable declarations and assignments
//! - Function declarations
//! - Expression precedence and factor forms
//! - Control flow statements and boolean conditions
//! - Error messages

use std::rc::Rc;

use super::parser::{parse, parse_expression, Parser};
use crate::{
    ast::{
        expressions::{
            AddOp, BoolExpr, ClosureBody, CompareOp, ExprNode, FactorNode, LogicalOp, MulOp,
            TermNode,
        },
        rational::Rational,
        statements::{
            AssignOp, AssignmentStmt, BlockStmt, CallStmt, FieldAssignStmt, FnDeclStmt, ForStmt,
            IfStmt, IncDecStmt, IndexAssignStmt, MethodCallStmt, ReturnStmt, TimerStmt,
            VarDeclKind, VarDeclStmt,
        },
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> (Parser, Result<BlockStmt, Error>) {
    let tokens = tokenize(source.to_string(), Some("test.ah".to_string())).unwrap();
    parse(tokens, Rc::new("test.ah".to_string()))
}

fn parse_ok(source: &str) -> BlockStmt {
    parse_source(source).1.unwrap()
}

fn parse_err(source: &str) -> String {
    parse_source(source).1.unwrap_err().get_message()
}

fn expression(source: &str) -> ExprNode {
    let tokens = tokenize(source.to_string(), None).unwrap();
    parse_expression(tokens, Rc::new("test.ah".to_string())).unwrap()
}

fn rational(literal: &str) -> Rational {
    Rational::from_literal(literal).unwrap()
}

#[test]
fn test_parse_typed_variable_declaration() {
    let ast = parse_ok("var x -> number");
    let decl = ast.body[0].downcast::<VarDeclStmt>().unwrap();

    match &decl.kind {
        VarDeclKind::Typed {
            identifier,
            type_name,
        } => {
            assert_eq!(identifier, "x");
            assert_eq!(type_name, "number");
        }
        other => panic!("expected typed declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_multi_variable_declaration() {
    let ast = parse_ok("var a, b = 1, \"two\"");
    let decl = ast.body[0].downcast::<VarDeclStmt>().unwrap();

    assert_eq!(decl.identifiers(), vec!["a", "b"]);
    let VarDeclKind::Assigned(assignment) = &decl.kind else {
        panic!("expected assigned declaration");
    };
    assert_eq!(assignment.operator, AssignOp::Assign);
    assert_eq!(assignment.values.len(), 2);
}

#[test]
fn test_precedence() {
    let tree = expression("1 + 2 * 3");

    let ExprNode::Binary {
        op: AddOp::Add,
        left,
        right,
        ..
    } = &tree
    else {
        panic!("expected addition at the root, got {:?}", tree);
    };
    assert!(matches!(**left, ExprNode::Term(TermNode::Factor(_))));
    assert!(matches!(right, TermNode::Binary { op: MulOp::Mul, .. }));
    assert_eq!(tree.evaluate(), Ok(Some(rational("7"))));
}

#[test]
fn test_left_associativity() {
    let tree = expression("1 - 2 - 3");

    let ExprNode::Binary { left, .. } = &tree else {
        panic!("expected a binary root");
    };
    assert!(matches!(**left, ExprNode::Binary { op: AddOp::Sub, .. }));
    assert_eq!(tree.evaluate(), Ok(Some(-rational("4"))));
}

#[test]
fn test_random_operator_binds_like_multiplication() {
    let tree = expression("1 + 2 ~ 10");

    let ExprNode::Binary {
        op: AddOp::Add,
        right,
        ..
    } = &tree
    else {
        panic!("expected addition at the root");
    };
    assert!(matches!(right, TermNode::Binary { op: MulOp::Rand, .. }));
    assert_eq!(tree.evaluate(), Ok(None));
}

#[test]
fn test_parenthesised_expression() {
    assert_eq!(expression("(1 + 2) * 3").evaluate(), Ok(Some(rational("9"))));
    assert_eq!(expression("0.1 + 0.2").evaluate(), Ok(Some(rational("0.3"))));
}

fn factors(term: &TermNode) -> Vec<&FactorNode> {
    match term {
        TermNode::Factor(factor) => vec![factor],
        TermNode::Binary { left, right, .. } => {
            let mut result = factors(left);
            result.push(right);
            result
        }
    }
}

#[test]
fn test_factor_forms() {
    let tree = expression("++a * b-- * f(1, x) * 'c' * true * --d * e++ * \"s\" * y");
    let ExprNode::Term(term) = &tree else {
        panic!("expected a single term");
    };
    let leaves = factors(term);

    assert!(matches!(leaves[0], FactorNode::PreIncrement { name, .. } if name == "a"));
    assert!(matches!(leaves[1], FactorNode::PostDecrement { name, .. } if name == "b"));
    assert!(matches!(leaves[2], FactorNode::Call(call) if call.name == "f" && call.arguments.len() == 2));
    assert!(matches!(leaves[3], FactorNode::Char { value, .. } if value == "c"));
    assert!(matches!(leaves[4], FactorNode::Bool { value: true, .. }));
    assert!(matches!(leaves[5], FactorNode::PreDecrement { name, .. } if name == "d"));
    assert!(matches!(leaves[6], FactorNode::PostIncrement { name, .. } if name == "e"));
    assert!(matches!(leaves[7], FactorNode::String { value, .. } if value == "s"));
    assert!(matches!(leaves[8], FactorNode::Variable { name, .. } if name == "y"));
}

#[test]
fn test_call_assignment_disambiguation() {
    let ast = parse_ok("foo()\nfoo = 1\nfoo, bar = 1, 2");

    let call = ast.body[0].downcast::<CallStmt>().unwrap();
    assert_eq!(call.call.name, "foo");
    assert!(call.call.arguments.is_empty());

    let single = ast.body[1].downcast::<AssignmentStmt>().unwrap();
    assert_eq!(single.targets, vec!["foo"]);

    let multiple = ast.body[2].downcast::<AssignmentStmt>().unwrap();
    assert_eq!(multiple.targets, vec!["foo", "bar"]);
    assert_eq!(multiple.values.len(), 2);
}

#[test]
fn test_compound_assignment_and_increment() {
    let ast = parse_ok("x += 2\nx /= 4\nx++\ny--");

    let add = ast.body[0].downcast::<AssignmentStmt>().unwrap();
    assert_eq!(add.operator, AssignOp::AddAssign);
    let div = ast.body[1].downcast::<AssignmentStmt>().unwrap();
    assert_eq!(div.operator, AssignOp::DivAssign);

    let inc = ast.body[2].downcast::<IncDecStmt>().unwrap();
    assert_eq!(inc.identifier, "x");
    assert!(inc.is_increment);
    let dec = ast.body[3].downcast::<IncDecStmt>().unwrap();
    assert!(!dec.is_increment);
}

#[test]
fn test_empty_for_clauses() {
    let ast = parse_ok("for (;;) { }");
    let for_stmt = ast.body[0].downcast::<ForStmt>().unwrap();

    assert!(for_stmt.is_infinite());
    assert!(for_stmt.init.is_none());
    assert!(for_stmt.step.is_none());
    assert!(for_stmt.body.body.is_empty());
}

#[test]
fn test_full_for_loop() {
    let ast = parse_ok("for (var i = 0; i < 10; i++) {\n    x = x + i\n}");
    let for_stmt = ast.body[0].downcast::<ForStmt>().unwrap();

    assert!(for_stmt.init.as_ref().unwrap().downcast::<VarDeclStmt>().is_some());
    assert!(matches!(
        for_stmt.condition,
        Some(BoolExpr::Comparison {
            op: CompareOp::Less,
            ..
        })
    ));
    assert!(for_stmt.step.as_ref().unwrap().downcast::<IncDecStmt>().is_some());
    assert_eq!(for_stmt.body.body.len(), 1);
}

#[test]
fn test_if_chain_across_lines() {
    let ast = parse_ok("if (a > 1) {\n} elseif (a < 0) {\n}\nelse {\n    b = 1\n}");
    let if_stmt = ast.body[0].downcast::<IfStmt>().unwrap();

    assert_eq!(if_stmt.else_ifs.len(), 1);
    assert_eq!(if_stmt.else_body.as_ref().unwrap().body.len(), 1);
}

#[test]
fn test_if_without_else_rewinds() {
    let ast = parse_ok("if (a > 1) {\n}\nb = 2");

    assert_eq!(ast.body.len(), 2);
    let if_stmt = ast.body[0].downcast::<IfStmt>().unwrap();
    assert!(if_stmt.else_ifs.is_empty());
    assert!(if_stmt.else_body.is_none());
    assert!(ast.body[1].downcast::<AssignmentStmt>().is_some());
}

#[test]
fn test_grouped_boolean_and_parenthesised_operand() {
    let ast = parse_ok("if ((a + 1) > 2 && (b < 3)) {\n}");
    let if_stmt = ast.body[0].downcast::<IfStmt>().unwrap();

    let BoolExpr::Logical {
        left,
        op: LogicalOp::And,
        right,
        ..
    } = &if_stmt.condition
    else {
        panic!("expected a logical condition, got {:?}", if_stmt.condition);
    };
    assert!(matches!(
        **left,
        BoolExpr::Comparison {
            op: CompareOp::Greater,
            ..
        }
    ));
    assert!(matches!(**right, BoolExpr::Grouped(_)));
}

#[test]
fn test_logical_operators_share_precedence() {
    let ast = parse_ok("if (a > 1 || b > 2 && c > 3) {\n}");
    let if_stmt = ast.body[0].downcast::<IfStmt>().unwrap();

    // ((a > 1 || b > 2) && c > 3)
    let BoolExpr::Logical { left, op, .. } = &if_stmt.condition else {
        panic!("expected a logical condition");
    };
    assert_eq!(*op, LogicalOp::And);
    assert!(matches!(**left, BoolExpr::Logical { op: LogicalOp::Or, .. }));
}

#[test]
fn test_function_declaration() {
    let ast = parse_ok("func add(var a -> number, var b -> int) -> number {\n    return a + b\n}");
    let func = ast.body[0].downcast::<FnDeclStmt>().unwrap();

    assert_eq!(func.identifier, "add");
    assert_eq!(func.parameters.len(), 2);
    assert_eq!(func.parameters[1].name, "b");
    assert_eq!(func.parameters[1].type_name, "int");
    assert_eq!(func.return_types, vec!["number"]);

    let ret = func.body.body[0].downcast::<ReturnStmt>().unwrap();
    assert_eq!(ret.values.len(), 1);
}

#[test]
fn test_function_with_multiple_returns() {
    let ast = parse_ok("func pair() -> number, Point {\n    return 1, \"x\"\n    return\n}");
    let func = ast.body[0].downcast::<FnDeclStmt>().unwrap();

    assert!(func.parameters.is_empty());
    assert_eq!(func.return_types, vec!["number", "Point"]);
    assert_eq!(func.body.body[0].downcast::<ReturnStmt>().unwrap().values.len(), 2);
    assert!(func.body.body[1].downcast::<ReturnStmt>().unwrap().values.is_empty());
}

#[test]
fn test_block_ids_are_unique() {
    let ast = parse_ok("{\n}\n{\n    {\n    }\n}");

    let first = ast.body[0].downcast::<BlockStmt>().unwrap();
    let outer = ast.body[1].downcast::<BlockStmt>().unwrap();
    let inner = outer.body[0].downcast::<BlockStmt>().unwrap();

    assert_eq!(ast.id, 0);
    assert_ne!(first.id, outer.id);
    assert_ne!(first.id, inner.id);
    assert_ne!(outer.id, inner.id);
}

#[test]
fn test_constant_pool() {
    let (parser, result) = parse_source("a = 1 + 1\nb = \"s\"\nc = 2.5\nd = \"s\"");
    assert!(result.is_ok());

    let constants = parser.get_constants();
    assert_eq!(constants.numbers(), &[rational("1"), rational("2.5")]);
    assert_eq!(constants.strings(), &["s".to_string()]);
}

#[test]
fn test_paren_statement_requires_block() {
    assert_eq!(parse_err("(a)"), "unexpected ( expecting '{' -> BlockStatement");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_err("var = 1"),
        "unexpected = expecting 'WORD' -> VarStatement"
    );
    assert_eq!(
        parse_err("x = }"),
        "unexpected } expecting 'num' || 'WORD' || 'true' || 'false' || 'string' || 'char' || '(' || '++' || '--' || '{' || '|' || '||' -> Factor"
    );
    assert_eq!(
        parse_err("return 1"),
        "unexpected return expecting 'func' || 'var' || '(' || '{' || 'WORD' || '\\n' || 'for' || 'if' || 'timer' -> Statement"
    );
    assert_eq!(
        parse_err("a = 1 b = 2"),
        "unexpected b expecting '\\n' || 'End' -> Statement"
    );
    assert_eq!(
        parse_err("{\n    a = 1\n"),
        "unexpected End expecting '}' -> BlockStatement"
    );
    assert_eq!(
        parse_err("foo bar"),
        "unexpected bar expecting '(' || '=' || ',' || '+=' || '-=' || '*=' || '/=' || '++' || '--' || '.' || '[' -> WordStatement"
    );
    assert_eq!(
        parse_err("var a, b += 1"),
        "unexpected += expecting ',' || '=' -> AssignmentStatement"
    );
}

#[test]
fn test_equality_is_not_a_comparison() {
    assert_eq!(
        parse_err("if (a == 1) {\n}"),
        "unexpected == expecting '(' || '>' || '<' || '>=' || '<=' -> BooleanFactor"
    );
}

#[test]
fn test_error_position() {
    let error = parse_source("a = 1\nb = )").1.unwrap_err();

    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
    assert_eq!(error.get_position().file.as_str(), "test.ah");
}

#[test]
fn test_parse_expression_rejects_trailing_tokens() {
    let tokens = tokenize("1 2".to_string(), None).unwrap();
    let error = parse_expression(tokens, Rc::new("test.ah".to_string())).unwrap_err();

    assert_eq!(error.get_message(), "unexpected 2 expecting 'End' -> Expression");
}

#[test]
fn test_empty_program() {
    let ast = parse_ok("\n\n  \n");
    assert!(ast.body.is_empty());
}

fn assigned_value(ast: &BlockStmt) -> &FactorNode {
    let decl = ast.body[0].downcast::<VarDeclStmt>().unwrap();
    let VarDeclKind::Assigned(assignment) = &decl.kind else {
        panic!("expected assigned declaration");
    };
    let ExprNode::Term(TermNode::Factor(factor)) = &assignment.values[0] else {
        panic!("expected a single factor, got {:?}", assignment.values[0]);
    };
    factor
}

#[test]
fn test_parse_closure_with_expression_body() {
    let ast = parse_ok("var f = |x| => x + 1");

    let FactorNode::Closure(closure) = assigned_value(&ast) else {
        panic!("expected a closure");
    };
    assert_eq!(closure.parameters.len(), 1);
    assert_eq!(closure.parameters[0].name, "x");
    assert_eq!(closure.parameters[0].type_name, None);
    assert!(matches!(
        &closure.body,
        ClosureBody::Expression(body) if matches!(**body, ExprNode::Binary { op: AddOp::Add, .. })
    ));
}

#[test]
fn test_parse_closure_without_parameters() {
    let ast = parse_ok("var f = || => {\n    return 1\n}");

    let FactorNode::Closure(closure) = assigned_value(&ast) else {
        panic!("expected a closure");
    };
    assert!(closure.parameters.is_empty());
    let ClosureBody::Block(block) = &closure.body else {
        panic!("expected a block body");
    };
    assert!(block.body[0].downcast::<ReturnStmt>().is_some());
}

#[test]
fn test_parse_closure_parameter_types() {
    let ast = parse_ok("var f = |a -> number, b| => a");

    let FactorNode::Closure(closure) = assigned_value(&ast) else {
        panic!("expected a closure");
    };
    let parameters: Vec<(&str, Option<&str>)> = closure
        .parameters
        .iter()
        .map(|param| (param.name.as_str(), param.type_name.as_deref()))
        .collect();
    assert_eq!(parameters, vec![("a", Some("number")), ("b", None)]);
}

#[test]
fn test_parse_closure_requires_fat_arrow() {
    assert_eq!(parse_err("var f = |x| x"), "unexpected x expecting '=>' -> Closure");
}

#[test]
fn test_parse_table_literal() {
    let ast = parse_ok("var t = {a: 1, b: \"s\",}");

    let FactorNode::Table { entries, .. } = assigned_value(&ast) else {
        panic!("expected a table");
    };
    let keys: Vec<&str> = entries.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(entries[0].value.evaluate().unwrap(), Some(Rational::from_integer(1)));
}

#[test]
fn test_parse_multiline_and_empty_tables() {
    let ast = parse_ok("var t = {\n    a: 1,\n    b: {}\n}\nvar u = {}");
    assert_eq!(ast.body.len(), 2);

    let FactorNode::Table { entries, .. } = assigned_value(&ast) else {
        panic!("expected a table");
    };
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[1].value,
        ExprNode::Term(TermNode::Factor(FactorNode::Table { ref entries, .. })) if entries.is_empty()
    ));
}

#[test]
fn test_parse_field_and_index_access() {
    let ast = parse_ok("var y = t.a");
    let FactorNode::FieldAccess { object, field, .. } = assigned_value(&ast) else {
        panic!("expected a field access");
    };
    assert_eq!(field, "a");
    assert!(matches!(**object, FactorNode::Variable { ref name, .. } if name == "t"));

    let expr = expression("t[\"k\"] * 2");
    let ExprNode::Term(TermNode::Binary { left, .. }) = expr else {
        panic!("expected a multiplicative node");
    };
    assert!(matches!(*left, TermNode::Factor(FactorNode::IndexAccess { .. })));
}

#[test]
fn test_parse_chained_method_calls() {
    let ExprNode::Term(TermNode::Factor(FactorNode::MethodCall {
        callee, arguments, ..
    })) = expression("t.f(1).g(2, 3)")
    else {
        panic!("expected a method call");
    };

    assert_eq!(arguments.len(), 2);
    let FactorNode::FieldAccess { object, field, .. } = *callee else {
        panic!("expected a field access callee");
    };
    assert_eq!(field, "g");
    assert!(matches!(*object, FactorNode::MethodCall { ref arguments, .. } if arguments.len() == 1));
}

#[test]
fn test_parse_access_statements() {
    let ast = parse_ok("t.a = 1\nt[\"a\"] = 2\nt.f(1)\nt.list[0].push(3)");

    let field = ast.body[0].downcast::<FieldAssignStmt>().unwrap();
    assert_eq!(field.field, "a");
    assert!(matches!(field.object, FactorNode::Variable { ref name, .. } if name == "t"));

    let index = ast.body[1].downcast::<IndexAssignStmt>().unwrap();
    assert!(matches!(index.index, ExprNode::Term(TermNode::Factor(FactorNode::String { .. }))));

    let call = ast.body[2].downcast::<MethodCallStmt>().unwrap();
    assert_eq!(call.arguments.len(), 1);
    assert!(matches!(call.callee, FactorNode::FieldAccess { ref field, .. } if field == "f"));

    assert!(ast.body[3].downcast::<MethodCallStmt>().is_some());
}

#[test]
fn test_access_statement_needs_assignment_or_call() {
    assert_eq!(
        parse_err("t.a 1"),
        "unexpected 1 expecting '=' || '(' -> WordStatement"
    );
}

#[test]
fn test_parse_timer_statement() {
    let ast = parse_ok("timer {\n    a = 1\n}\nfor (;;) {\n    timer {\n    }\n}");

    let timer = ast.body[0].downcast::<TimerStmt>().unwrap();
    assert_eq!(timer.body.body.len(), 1);

    let for_stmt = ast.body[1].downcast::<ForStmt>().unwrap();
    assert!(for_stmt.body.body[0].downcast::<TimerStmt>().is_some());
}

#[test]
fn test_empty_token_stream() {
    let (_, ast) = parse(Vec::new(), Rc::new("test.ah".to_string()));
    assert!(ast.unwrap().body.is_empty());

    assert!(parse_expression(Vec::new(), Rc::new("test.ah".to_string())).is_err());
}
