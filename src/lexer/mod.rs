//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns source text into a stream
//! of tokens for the parser. It handles:
//!
//! - On-demand tokenization using regex patterns
//! - Recognition of the `let` keyword, identifiers, number literals,
//!   operators, and punctuation
//! - Token position and line tracking for error reporting
//! - Whitespace handling (there is no comment syntax)

pub mod lexer;
pub mod tokens;
