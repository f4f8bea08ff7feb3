//! The request/response gateway.

use std::collections::HashMap;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{FormatError, PromptError, PromptResult};
use crate::parsers::{self, ParseFn};
use crate::value::{Prompted, Value, ValueKind};

/// Sent after every format diagnostic.
pub const RETRY_HINT: &str = "Please try again.";

/// Sends messages to a user and requests typed values back.
pub struct Gateway<R, W> {
    input: R,
    output: W,
    parsers: HashMap<ValueKind, ParseFn>,
}

impl Gateway<StdinLock<'static>, Stdout> {
    /// A gateway over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Gateway<R, W> {
    /// Create a gateway with the built-in parsers registered.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            parsers: parsers::builtin().into_iter().collect(),
        }
    }

    /// Create a gateway with no parsers registered.
    ///
    /// Every kind, including the standard ones, must be added with
    /// [`Gateway::register_parser`] before it can be requested.
    pub fn empty(input: R, output: W) -> Self {
        Self {
            input,
            output,
            parsers: HashMap::new(),
        }
    }

    /// Write a message followed by a newline.
    pub fn send(&mut self, message: &str) -> PromptResult<()> {
        write_line(&mut self.output, message)
    }

    /// Register a parser for a kind that has none yet.
    ///
    /// Fails with [`PromptError::DuplicateParser`] and leaves the registry
    /// unchanged if the kind is already registered.
    pub fn register_parser<F>(&mut self, kind: ValueKind, parse: F) -> PromptResult<()>
    where
        F: Fn(&str) -> Result<Value, FormatError> + 'static,
    {
        if self.parsers.contains_key(&kind) {
            return Err(PromptError::DuplicateParser(kind));
        }
        tracing::debug!(%kind, "registered parser");
        self.parsers.insert(kind, Box::new(parse));
        Ok(())
    }

    /// Whether a parser is registered for `kind`.
    pub fn supports(&self, kind: &ValueKind) -> bool {
        self.parsers.contains_key(kind)
    }

    /// Prompt with `message` until the reply parses as `kind`.
    ///
    /// Malformed replies are reported to the user and the prompt is repeated
    /// with no attempt limit. Returns an error only when `kind` has no parser,
    /// when input runs out, or on I/O failure.
    pub fn request_value(&mut self, message: &str, kind: &ValueKind) -> PromptResult<Value> {
        let parse = self
            .parsers
            .get(kind)
            .ok_or_else(|| PromptError::UnsupportedType(kind.clone()))?;

        loop {
            write_line(&mut self.output, message)?;
            let line = read_line(&mut self.input)?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(%kind, input = %e.input, "rejected input");
                    write_line(&mut self.output, &e.to_string())?;
                    write_line(&mut self.output, RETRY_HINT)?;
                }
            }
        }
    }

    /// Prompt with `message` until the reply parses as `T`.
    pub fn request<T: Prompted>(&mut self, message: &str) -> PromptResult<T> {
        let expected = T::kind();
        let value = self.request_value(message, &expected)?;
        let found = value.kind();
        T::from_value(value).ok_or(PromptError::KindMismatch { expected, found })
    }

    /// Take the input and output channels back.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn write_line(output: &mut impl Write, message: &str) -> PromptResult<()> {
    writeln!(output, "{message}")?;
    output.flush()?;
    Ok(())
}

/// Read the next non-blank line, without its line terminator.
fn read_line(input: &mut impl BufRead) -> PromptResult<String> {
    let mut buf = String::new();
    loop {
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            return Err(PromptError::InputExhausted);
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        if !line.trim().is_empty() {
            return Ok(line.to_string());
        }
    }
}
