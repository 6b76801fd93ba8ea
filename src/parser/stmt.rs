use crate::{
    ast::node::{Identifier, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one declaration: a `let` statement, a block, or failing those a
/// bare expression statement terminated by `;`.
pub fn parse_stmt<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    parser.enter_nesting()?;
    let result = parse_stmt_inner(parser);
    parser.exit_nesting();
    result
}

fn parse_stmt_inner<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    if let Some(&stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    let expr = parse_expr(parser, BindingPower::None)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.describe(parser.current_token()),
            message: String::from("expected ';' after expression"),
        },
        parser.current_position(),
    );
    parser.expect_error(TokenKind::Semicolon, Some(error))?;

    Ok(expr)
}

pub fn parse_let_stmt<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    parser.advance()?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.describe(parser.current_token()),
            message: String::from("expected identifier after 'let'"),
        },
        parser.current_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let ident = Identifier {
        name: parser.lexeme(&name_token),
    };

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.describe(parser.current_token()),
            message: String::from("expected '=' after identifier"),
        },
        parser.current_position(),
    );
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let value = parse_expr(parser, BindingPower::None)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.describe(parser.current_token()),
            message: String::from("expected ';' after expression"),
        },
        parser.current_position(),
    );
    parser.expect_error(TokenKind::Semicolon, Some(error))?;

    Ok(Node::LetAssign {
        ident,
        value: Box::new(value),
    })
}

pub fn parse_block_stmt<'src>(parser: &mut Parser<'src>) -> Result<Node<'src>, Error> {
    parser.advance()?;

    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        // An unterminated block must fail here, not loop on EOF forever.
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnclosedBlock,
                parser.current_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::Block(body))
}
