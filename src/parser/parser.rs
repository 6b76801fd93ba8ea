//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. The parser pulls tokens from the Tokenizer one at a time,
//! keeping only the current and previous token, and uses a Pratt approach
//! with NUD/LED handlers for expression parsing and specialized functions
//! for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Nested expressions and blocks each consume a stack frame; parsing past
/// this depth fails instead of overflowing the stack.
const MAX_NESTING_DEPTH: u32 = 256;

/// The main parser structure that maintains parsing state.
///
/// The parser owns the Tokenizer and tracks exactly two tokens: the one
/// under the cursor and the one just consumed. AST identifiers borrow
/// straight from the source buffer, hence the shared `'src` lifetime.
pub struct Parser<'src> {
    /// The source being parsed; tokens and identifiers slice into it
    source: &'src str,
    /// Pull-based token source
    tokenizer: Tokenizer<'src>,
    /// The not-yet-consumed token under the cursor
    current: Token,
    /// The most recently consumed token
    previous: Token,
    /// Current nesting depth of expressions and statements
    depth: u32,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<'src>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'src>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'src>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser over a borrowed source buffer. The parser is
    /// not primed: call `advance` once before parsing.
    pub fn new(source: &'src str) -> Self {
        let placeholder = Token {
            kind: TokenKind::EOF,
            span: Span { start: 0, end: 0 },
            line: 1,
        };

        Parser {
            source,
            tokenizer: Tokenizer::new(source),
            current: placeholder,
            previous: placeholder,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> &Token {
        &self.previous
    }

    /// Resolves a token's lexeme against the source buffer. The returned
    /// slice lives as long as the source, not the parser borrow.
    pub fn lexeme(&self, token: &Token) -> &'src str {
        token.span.slice(self.source)
    }

    /// A human-readable rendering of a token for error messages.
    pub fn describe(&self, token: &Token) -> String {
        if token.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            String::from(self.lexeme(token))
        }
    }

    /// Shifts the current token into previous and pulls the next one from
    /// the Tokenizer. A malformed character sequence is a fatal lex error,
    /// not skipped. Returns the consumed token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.previous = self.current;
        self.current = self.tokenizer.scan_token();

        if self.current.kind == TokenKind::Error {
            return Err(Error::new(
                ErrorImpl::UnexpectedCharacter {
                    character: self.lexeme(&self.current).to_string(),
                },
                self.current_position(),
            ));
        }

        Ok(self.previous)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if the current token matches, otherwise
    /// the provided error or a default `UnexpectedToken`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: self.describe(&self.current),
                    },
                    self.current_position(),
                )),
            };
        }

        self.advance()
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks whether statements remain to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn current_position(&self) -> Position {
        Position {
            offset: self.current.span.start,
            line: self.current.line,
        }
    }

    /// Returns the source position of a specific token.
    pub fn position_of(&self, token: &Token) -> Position {
        Position {
            offset: token.span.start,
            line: token.line,
        }
    }

    pub(crate) fn enter_nesting(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep,
                self.current_position(),
            ));
        }
        Ok(())
    }

    pub(crate) fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<'src> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<'src> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<'src> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'src>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// A token that also has an infix rule keeps its infix binding power:
    /// `-` must stay at `Term` even though it is a prefix operator too.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'src>) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<'src>) {
        self.binding_power_lookup.insert(kind, BindingPower::None);
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses source text into an Abstract Syntax Tree.
///
/// This is the main entry point. It creates a parser over the borrowed
/// source, initializes the lookup tables, primes the token cursor, and
/// parses statements until end of input, collecting them into one root
/// `Block` whose ownership transfers to the caller.
///
/// Parsing stops at the first error; no partial AST is returned.
pub fn parse(source: &str) -> Result<Node<'_>, Error> {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);

    // Prime the parser with the first token.
    parser.advance()?;

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(Node::Block(body))
}
