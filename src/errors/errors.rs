use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexer or parser failure, located at a byte offset in the source.
///
/// Errors are never recovered from: the first one aborts tokenizing or
/// parsing and is handed back to the caller unchanged.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for a [`ErrorImpl::SyntaxError`].
    pub fn syntax(message: impl Into<String>, token: Option<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                message: message.into(),
                token,
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human readable message, without the error name.
    pub fn get_message(&self) -> String {
        match &self.internal_error {
            ErrorImpl::SyntaxError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Text of the offending token, where one was available.
    pub fn get_token(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } | ErrorImpl::NumberParseError { token } => {
                Some(token.as_str())
            }
            ErrorImpl::SyntaxError { token, .. } => token.as_deref(),
            ErrorImpl::SourceTooLarge { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            // The caret already points at the character
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SyntaxError {
                message,
                token: Some(token),
            } => ErrorTip::Suggestion(format!("{}, found `{}`", message, token)),
            ErrorImpl::SyntaxError {
                message,
                token: None,
            } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the number limit?",
                token
            )),
            ErrorImpl::SourceTooLarge { size } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, offsets are limited to {} bytes",
                size,
                u32::MAX
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("syntax error: {message}")]
    SyntaxError {
        message: String,
        token: Option<String>,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("source too large: {size} bytes")]
    SourceTooLarge { size: usize },
}
