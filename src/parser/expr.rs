use crate::{
    ast::node::{BinaryOp, Identifier, Node, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence-climbing core: parse a prefix expression, then fold in infix
/// operators while the current token binds more tightly than `bp`. Equal
/// binding powers stop the loop, so same-level operators associate left.
pub fn parse_expr<'src>(parser: &mut Parser<'src>, bp: BindingPower) -> Result<Node<'src>, Error> {
    parser.enter_nesting()?;
    let result = parse_expr_inner(parser, bp);
    parser.exit_nesting();
    result
}

fn parse_expr_inner<'src>(
    parser: &mut Parser<'src>,
    bp: BindingPower,
) -> Result<Node<'src>, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(&nud_fn) = parser.get_nud_lookup().get(&token_kind) else {
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.describe(parser.current_token()),
            },
            parser.current_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than bp, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(&operator_bp) if operator_bp > bp => operator_bp,
            _ => break,
        };

        let Some(&led_fn) = parser.get_led_lookup().get(&token_kind) else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.describe(parser.current_token()),
                },
                parser.current_position(),
            ));
        };

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let lexeme = parser.lexeme(parser.current_token());
            let result: Result<f64, _> = lexeme.parse();

            match result {
                Ok(value) => {
                    parser.advance()?;
                    Ok(Node::Number(value))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: lexeme.to_string(),
                    },
                    parser.current_position(),
                )),
            }
        }
        TokenKind::Identifier => {
            let name = parser.lexeme(parser.current_token());
            parser.advance()?;
            Ok(Node::LetGet(Identifier { name }))
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.describe(parser.current_token()),
            },
            parser.current_position(),
        )),
    }
}

pub fn parse_binary_expr<'src>(
    parser: &mut Parser<'src>,
    left: Node<'src>,
    bp: BindingPower,
) -> Result<Node<'src>, Error> {
    let operator_token = parser.advance()?;

    let op = match operator_token.kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Dash => BinaryOp::Subtract,
        TokenKind::Star => BinaryOp::Multiply,
        TokenKind::Slash => BinaryOp::Divide,
        // Unreachable while only the four arithmetic operators register
        // this handler; kept as a hard failure rather than a panic.
        _ => {
            return Err(Error::new(
                ErrorImpl::UnknownBinaryOperator {
                    token: parser.describe(&operator_token),
                },
                parser.position_of(&operator_token),
            ))
        }
    };

    // Parsing the rhs at the operator's own binding power makes equal
    // precedence bind left: a - b - c is (a - b) - c.
    let right = parse_expr(parser, bp)?;

    Ok(Node::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    let operator_token = parser.advance()?;

    let op = match operator_token.kind {
        TokenKind::Dash => UnaryOp::Negate,
        // Only `-` registers this handler today; defensive case preserved.
        _ => {
            return Err(Error::new(
                ErrorImpl::UnknownUnaryOperator {
                    token: parser.describe(&operator_token),
                },
                parser.position_of(&operator_token),
            ))
        }
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Node::Unary {
        op,
        operand: Box::new(operand),
    })
}

pub fn parse_assignment_expr<'src>(
    parser: &mut Parser<'src>,
    left: Node<'src>,
    bp: BindingPower,
) -> Result<Node<'src>, Error> {
    let operator_token = parser.advance()?;

    // Only a plain binding read can be assigned to.
    let Node::LetGet(ident) = left else {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            parser.position_of(&operator_token),
        ));
    };

    let value = parse_expr(parser, bp)?;

    Ok(Node::LetSet {
        ident,
        value: Box::new(value),
    })
}

pub fn parse_grouping_expr<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    parser.advance()?;

    let expr = parse_expr(parser, BindingPower::None)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.describe(parser.current_token()),
            message: String::from("expected ')' after expression"),
        },
        parser.current_position(),
    );
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    // Grouping has no node of its own; the parentheses only shape the tree.
    Ok(expr)
}
