//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement dispatch over an ordered rule table
//! - Blocks with newline separated statements, conditionals, loops,
//!   declarations and returns
//! - Expression parsing (binary ops, calls, members, closures) with a
//!   Pratt parser
//! - Type parsing for type annotations
//!
//! Errors are never recovered from: the first one ends the parse.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
