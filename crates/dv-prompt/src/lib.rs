//! Typed line-oriented input for Delve.
//!
//! A [`Gateway`] writes prompts to an output channel, reads raw lines from an
//! input channel, and converts them to typed values through a registry of
//! parsers keyed by [`ValueKind`]. Malformed input is reported to the user and
//! the request is repeated until a valid value arrives, so callers only ever
//! see errors for misconfiguration or exhausted input.

/// Error types for the gateway and its parsers.
pub mod error;
/// The request/response gateway.
pub mod gateway;
/// Built-in parsers for every standard value kind.
pub mod parsers;
/// Value kinds and parsed values.
pub mod value;

pub use error::{FormatError, PromptError, PromptResult};
pub use gateway::Gateway;
pub use parsers::ParseFn;
pub use value::{Prompted, Value, ValueKind};
