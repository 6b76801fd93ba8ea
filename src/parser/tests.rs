//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Let declarations and blocks
//! - Expression statements, assignment, binding reads
//! - Operator precedence and associativity
//! - Syntax errors (first-error reporting)

use crate::ast::node::{BinaryOp, Identifier, Node, UnaryOp};
use crate::errors::errors::ErrorKind;

use super::parser::parse;

#[test]
fn test_parse_let_declaration() {
    let result = parse("let x = 5;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::LetAssign {
            ident: Identifier { name: "x" },
            value: Box::new(Node::Number(5.0)),
        }])
    );
}

#[test]
fn test_parse_let_with_float() {
    let result = parse("let pi = 3.14;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::LetAssign {
            ident: Identifier { name: "pi" },
            value: Box::new(Node::Number(3.14)),
        }])
    );
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    let result = parse("2 + 3 * 4;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Binary {
            left: Box::new(Node::Number(2.0)),
            op: BinaryOp::Add,
            right: Box::new(Node::Binary {
                left: Box::new(Node::Number(3.0)),
                op: BinaryOp::Multiply,
                right: Box::new(Node::Number(4.0)),
            }),
        }])
    );
}

#[test]
fn test_parse_subtraction_is_left_associative() {
    let result = parse("2 - 3 - 4;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Binary {
            left: Box::new(Node::Binary {
                left: Box::new(Node::Number(2.0)),
                op: BinaryOp::Subtract,
                right: Box::new(Node::Number(3.0)),
            }),
            op: BinaryOp::Subtract,
            right: Box::new(Node::Number(4.0)),
        }])
    );
}

#[test]
fn test_parse_unary_negate() {
    let result = parse("-5;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(Node::Number(5.0)),
        }])
    );
}

#[test]
fn test_parse_unary_binds_tighter_than_binary() {
    let result = parse("-a * b;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Binary {
            left: Box::new(Node::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(Node::LetGet(Identifier { name: "a" })),
            }),
            op: BinaryOp::Multiply,
            right: Box::new(Node::LetGet(Identifier { name: "b" })),
        }])
    );
}

#[test]
fn test_parse_double_negate() {
    let result = parse("--5;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(Node::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(Node::Number(5.0)),
            }),
        }])
    );
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let result = parse("(2 + 3) * 4;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Binary {
            left: Box::new(Node::Binary {
                left: Box::new(Node::Number(2.0)),
                op: BinaryOp::Add,
                right: Box::new(Node::Number(3.0)),
            }),
            op: BinaryOp::Multiply,
            right: Box::new(Node::Number(4.0)),
        }])
    );
}

#[test]
fn test_parse_assignment_statement() {
    let result = parse("x = 42;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::LetSet {
            ident: Identifier { name: "x" },
            value: Box::new(Node::Number(42.0)),
        }])
    );
}

#[test]
fn test_parse_binding_read() {
    let result = parse("x;");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::LetGet(Identifier { name: "x" })])
    );
}

#[test]
fn test_parse_block_keeps_declaration_order() {
    let result = parse("{ let a = 1; let b = 2; }");

    assert_eq!(
        result.unwrap(),
        Node::Block(vec![Node::Block(vec![
            Node::LetAssign {
                ident: Identifier { name: "a" },
                value: Box::new(Node::Number(1.0)),
            },
            Node::LetAssign {
                ident: Identifier { name: "b" },
                value: Box::new(Node::Number(2.0)),
            },
        ])])
    );
}

#[test]
fn test_parse_nested_blocks() {
    let result = parse("{ let x = 10; { let y = 20; } }");

    assert!(result.is_ok());
    let Node::Block(top) = result.unwrap() else {
        panic!("expected root block");
    };
    let Node::Block(outer) = &top[0] else {
        panic!("expected outer block");
    };
    assert_eq!(outer.len(), 2);
    assert!(matches!(outer[1], Node::Block(_)));
}

#[test]
fn test_parse_empty_block() {
    let result = parse("{ }");

    assert_eq!(result.unwrap(), Node::Block(vec![Node::Block(vec![])]));
}

#[test]
fn test_parse_empty_program() {
    let result = parse("");

    assert_eq!(result.unwrap(), Node::Block(vec![]));
}

#[test]
fn test_parse_multiple_statements() {
    let result = parse("let x = 10; let y = 20; let z = x + y;");

    let Node::Block(body) = result.unwrap() else {
        panic!("expected root block");
    };
    assert_eq!(body.len(), 3);
}

#[test]
fn test_parse_truncated_expression() {
    let result = parse("1 +");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().offset, 3);
}

#[test]
fn test_parse_missing_semicolon() {
    let result = parse("let x = 42");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_missing_identifier_after_let() {
    let result = parse("let = 42;");

    assert!(result.is_err());
}

#[test]
fn test_parse_missing_equals_after_identifier() {
    let result = parse("let x 42;");

    assert!(result.is_err());
}

#[test]
fn test_parse_unterminated_block() {
    let result = parse("{ let a = 1;");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnclosedBlock");
}

#[test]
fn test_parse_unterminated_grouping() {
    let result = parse("(1 + 2;");

    assert!(result.is_err());
}

#[test]
fn test_parse_reserved_prefix_operator() {
    // `==` is lexed but has no parse rule.
    let result = parse("== 4;");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "ExpectedExpression");
}

#[test]
fn test_parse_reserved_infix_operator() {
    // `<` carries no binding power, so the expression ends before it and
    // the statement misses its semicolon.
    let result = parse("1 < 2;");

    assert!(result.is_err());
}

#[test]
fn test_parse_invalid_assignment_target() {
    let result = parse("1 = 2;");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_parse_unexpected_character() {
    let result = parse("let x = @;");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().offset, 8);
}

#[test]
fn test_parse_error_position_on_second_line() {
    let result = parse("let a = 1;\nlet b = ?;");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().offset, 19);
}

#[test]
fn test_parse_deep_nesting_is_bounded() {
    // Well past the depth limit; must fail cleanly, not blow the stack.
    let source = format!("{}1{};", "(".repeat(2000), ")".repeat(2000));
    let result = parse(&source);

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_parse_number_adjacent_to_number() {
    let result = parse("5 5;");

    assert!(result.is_err());
}
