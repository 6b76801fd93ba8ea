//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the tokenizer's output
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let declarations, blocks, expression statements)
//! - Expression parsing (binary ops, unary negate, grouping, literals)
//! - First-error reporting with source positions
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
