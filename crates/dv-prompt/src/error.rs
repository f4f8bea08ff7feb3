use thiserror::Error;

use crate::value::ValueKind;

/// Result type for gateway operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors surfaced to callers of the gateway.
///
/// Malformed user input never appears here; it is reported to the user and
/// retried inside the gateway.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No parser is registered for the requested kind.
    #[error("input of kind {0} is not supported")]
    UnsupportedType(ValueKind),

    /// A parser for this kind is already registered.
    #[error("a parser for {0} already exists")]
    DuplicateParser(ValueKind),

    /// The input stream ended while a value was still required.
    #[error("input ended before a value was supplied")]
    InputExhausted,

    /// A parser produced a value of a different kind than the caller asked for.
    #[error("parser for {expected} produced a {found} value")]
    KindMismatch {
        /// The kind that was requested.
        expected: ValueKind,
        /// The kind of the value actually produced.
        found: ValueKind,
    },

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw input does not match the grammar of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input \"{input}\" could not be parsed, expected {expected}")]
pub struct FormatError {
    /// The offending input.
    pub input: String,
    /// The kind that was expected.
    pub expected: ValueKind,
}

impl FormatError {
    /// Create a format error for `input`.
    pub fn new(input: impl Into<String>, expected: ValueKind) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}
