use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// What the tokenizer does with a pattern match.
#[derive(Clone, Copy)]
enum PatternKind {
    /// Whitespace: skipped, newlines bump the line counter.
    Whitespace,
    /// An identifier-shaped lexeme, classified against the keyword table.
    Symbol,
    /// A fixed token kind taken verbatim from the match.
    Simple(TokenKind),
}

struct TokenPattern {
    regex: Regex,
    kind: PatternKind,
}

impl TokenPattern {
    fn new(pattern: &str, kind: PatternKind) -> TokenPattern {
        TokenPattern {
            regex: Regex::new(pattern).unwrap(),
            kind,
        }
    }
}

lazy_static! {
    // Order matters: two-character operators must come before their
    // one-character prefixes.
    static ref PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern::new("[ \\t\\r\\n]+", PatternKind::Whitespace),
        TokenPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", PatternKind::Symbol),
        // The fractional part requires a digit after the dot, so a trailing
        // dot is left for the next scan.
        TokenPattern::new("[0-9]+(\\.[0-9]+)?", PatternKind::Simple(TokenKind::Number)),
        TokenPattern::new("\\{", PatternKind::Simple(TokenKind::OpenCurly)),
        TokenPattern::new("\\}", PatternKind::Simple(TokenKind::CloseCurly)),
        TokenPattern::new("\\(", PatternKind::Simple(TokenKind::OpenParen)),
        TokenPattern::new("\\)", PatternKind::Simple(TokenKind::CloseParen)),
        TokenPattern::new("==", PatternKind::Simple(TokenKind::Equals)),
        TokenPattern::new("!=", PatternKind::Simple(TokenKind::NotEquals)),
        TokenPattern::new("!", PatternKind::Simple(TokenKind::Not)),
        TokenPattern::new("=", PatternKind::Simple(TokenKind::Assignment)),
        TokenPattern::new("<=", PatternKind::Simple(TokenKind::LessEquals)),
        TokenPattern::new("<", PatternKind::Simple(TokenKind::Less)),
        TokenPattern::new(">=", PatternKind::Simple(TokenKind::GreaterEquals)),
        TokenPattern::new(">", PatternKind::Simple(TokenKind::Greater)),
        TokenPattern::new("\\.", PatternKind::Simple(TokenKind::Dot)),
        TokenPattern::new(";", PatternKind::Simple(TokenKind::Semicolon)),
        TokenPattern::new(",", PatternKind::Simple(TokenKind::Comma)),
        TokenPattern::new("\\+", PatternKind::Simple(TokenKind::Plus)),
        TokenPattern::new("-", PatternKind::Simple(TokenKind::Dash)),
        TokenPattern::new("/", PatternKind::Simple(TokenKind::Slash)),
        TokenPattern::new("\\*", PatternKind::Simple(TokenKind::Star)),
    ];
}

/// A pull-based scanner over a borrowed source buffer. Each `scan_token`
/// call produces exactly one token; nothing is buffered.
pub struct Tokenizer<'src> {
    source: &'src str,
    pos: u32,
    line: u32,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Tokenizer<'src> {
        Tokenizer {
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.pos as usize..]
    }

    fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Scans past whitespace and returns the next token. At the end of the
    /// input this keeps returning an `EOF` token with an empty span. An
    /// unrecognized character produces an `Error` token spanning it.
    pub fn scan_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let span = Span {
                    start: self.pos,
                    end: self.pos,
                };
                return MK_TOKEN!(TokenKind::EOF, span, self.line);
            }

            let remaining = self.remainder();

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .filter(|found| found.start() == 0)
                    .map(|found| (pattern.kind, found.as_str()))
            });

            let Some((kind, lexeme)) = matched else {
                let length = remaining.chars().next().map_or(1, |c| c.len_utf8()) as u32;
                let span = Span {
                    start: self.pos,
                    end: self.pos + length,
                };
                self.advance_n(length);
                return MK_TOKEN!(TokenKind::Error, span, self.line);
            };

            let start = self.pos;
            let line = self.line;
            self.advance_n(lexeme.len() as u32);

            let span = Span {
                start,
                end: self.pos,
            };

            match kind {
                PatternKind::Whitespace => {
                    self.line += lexeme.matches('\n').count() as u32;
                }
                PatternKind::Symbol => {
                    let kind = RESERVED_LOOKUP
                        .get(lexeme)
                        .copied()
                        .unwrap_or(TokenKind::Identifier);
                    return MK_TOKEN!(kind, span, line);
                }
                PatternKind::Simple(kind) => {
                    return MK_TOKEN!(kind, span, line);
                }
            }
        }
    }
}

/// Scans the whole source into a token vector ending with `EOF`. The first
/// unrecognized character aborts the scan with an `UnexpectedCharacter`
/// diagnostic.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.scan_token();
        match token.kind {
            TokenKind::Error => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter {
                        character: token.lexeme(source).to_string(),
                    },
                    Position {
                        offset: token.span.start,
                        line: token.line,
                    },
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
