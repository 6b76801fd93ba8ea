use std::collections::HashMap;

use crate::{ast::node::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator binding powers, weakest to strongest. The ordering is the
/// precedence ladder; `PartialOrd` comparisons drive the climbing loop.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    None,
    Assignment,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Call,
    Primary,
}

pub type StmtHandler<'src> = fn(&mut Parser<'src>) -> Result<Node<'src>, Error>;
pub type NUDHandler<'src> = fn(&mut Parser<'src>) -> Result<Node<'src>, Error>;
pub type LEDHandler<'src> =
    fn(&mut Parser<'src>, Node<'src>, BindingPower) -> Result<Node<'src>, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Assignment
    parser.led(
        TokenKind::Assignment,
        BindingPower::Assignment,
        parse_assignment_expr,
    );

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Term, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Term, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Factor, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Factor, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);

    // Equality (== !=), comparison (< <= > >=), logical or/and, `!`, `,`
    // and `.` are lexed but carry no rule yet: an expression touching them
    // fails at parse time.
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<'src> = HashMap<TokenKind, StmtHandler<'src>>;
pub type NUDLookup<'src> = HashMap<TokenKind, NUDHandler<'src>>;
pub type LEDLookup<'src> = HashMap<TokenKind, LEDHandler<'src>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
