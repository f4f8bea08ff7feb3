//! Built-in parsers.
//!
//! Every numeric and boolean parser trims surrounding whitespace and then
//! requires the whole remainder to be a valid literal. Partial parses such as
//! `"4abc"` are rejected.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::FormatError;
use crate::value::{Value, ValueKind};

/// A function turning raw input into a value.
pub type ParseFn = Box<dyn Fn(&str) -> Result<Value, FormatError>>;

/// The parsers every gateway starts with.
pub fn builtin() -> Vec<(ValueKind, ParseFn)> {
    vec![
        (ValueKind::Text, Box::new(parse_text) as ParseFn),
        (ValueKind::Integer, Box::new(parse_integer) as ParseFn),
        (ValueKind::Float32, Box::new(parse_f32) as ParseFn),
        (ValueKind::Float64, Box::new(parse_f64) as ParseFn),
        (ValueKind::Decimal, Box::new(parse_decimal) as ParseFn),
        (ValueKind::Boolean, Box::new(parse_bool) as ParseFn),
    ]
}

fn parse_literal<T: FromStr>(input: &str, kind: ValueKind) -> Result<T, FormatError> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| FormatError::new(input, kind))
}

/// Identity: text is returned exactly as read.
pub fn parse_text(input: &str) -> Result<Value, FormatError> {
    Ok(Value::Text(input.to_string()))
}

/// Parse a whole number.
pub fn parse_integer(input: &str) -> Result<Value, FormatError> {
    parse_literal(input, ValueKind::Integer).map(Value::Integer)
}

/// Parse a 32-bit float.
pub fn parse_f32(input: &str) -> Result<Value, FormatError> {
    parse_literal(input, ValueKind::Float32).map(Value::Float32)
}

/// Parse a 64-bit float.
pub fn parse_f64(input: &str) -> Result<Value, FormatError> {
    parse_literal(input, ValueKind::Float64).map(Value::Float64)
}

/// Parse an exact decimal.
pub fn parse_decimal(input: &str) -> Result<Value, FormatError> {
    // `Decimal`'s `FromStr` skips `_` digit separators.
    if input.contains('_') {
        return Err(FormatError::new(input, ValueKind::Decimal));
    }
    parse_literal::<Decimal>(input, ValueKind::Decimal).map(Value::Decimal)
}

/// Parse `true` or `false`, ignoring case.
pub fn parse_bool(input: &str) -> Result<Value, FormatError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        _ => Err(FormatError::new(input, ValueKind::Boolean)),
    }
}
