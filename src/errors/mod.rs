//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and syntax failures
//! - Helpful error messages and suggestions

pub mod errors;
