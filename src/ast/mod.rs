//! AST (Abstract Syntax Tree) module
//! Contains the node model produced by the parser
//!
//! Submodules:
//! - node: The Node enum, operator kinds, identifiers, and pretty-printing

pub mod node;
