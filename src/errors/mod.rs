//! Error types and error handling.
//!
//! This module defines the diagnostics produced by the tokenizer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - A lex/syntax classification for every diagnostic
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
