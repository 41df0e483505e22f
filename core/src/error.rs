//! Error types for argument parsing.
//!
//! Every parse operation in this crate fails fast with a [`ParseError`].
//! Errors describe what went wrong (missing value, failed conversion,
//! rejected check, bad subcommand token) but deliberately do not identify
//! which option produced them; mapping failures to user-facing messages is
//! the caller's responsibility.

use thiserror::Error;

/// Errors that can occur while parsing an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token matched an option that has no default value.
    #[error("missing required option")]
    MissingOption,

    /// A matched value failed conversion or custom extraction.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A check predicate rejected the value; carries the message attached
    /// to that check.
    #[error("{0}")]
    Rejected(String),

    /// A selector was given an empty argument list, or no command token was
    /// found ahead of shared options.
    #[error("missing subcommand")]
    MissingCommand,

    /// The first token matched no command in the selector.
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
