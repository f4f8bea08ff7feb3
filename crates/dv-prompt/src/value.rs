use rust_decimal::Decimal;

/// The kind of value a request asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text, returned as typed.
    Text,
    /// A whole number.
    Integer,
    /// A 32-bit floating point number.
    Float32,
    /// A 64-bit floating point number.
    Float64,
    /// An exact decimal number.
    Decimal,
    /// `true` or `false`.
    Boolean,
    /// A caller-defined kind.
    Named(String),
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "a whole number"),
            Self::Float32 => write!(f, "a 32-bit floating point number"),
            Self::Float64 => write!(f, "a 64-bit floating point number"),
            Self::Decimal => write!(f, "a decimal number"),
            Self::Boolean => write!(f, "true or false"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A 32-bit float.
    Float32(f32),
    /// A 64-bit float.
    Float64(f64),
    /// An exact decimal.
    Decimal(Decimal),
    /// A boolean.
    Boolean(bool),
}

impl Value {
    /// The built-in kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }
}

/// Rust types that can be requested directly from a gateway.
pub trait Prompted: Sized {
    /// The kind whose parser produces this type.
    fn kind() -> ValueKind;

    /// Extract the typed value, or `None` if the value is of another kind.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! prompted {
    ($ty:ty, $variant:ident) => {
        impl Prompted for $ty {
            fn kind() -> ValueKind {
                ValueKind::$variant
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

prompted!(String, Text);
prompted!(i64, Integer);
prompted!(f32, Float32);
prompted!(f64, Float64);
prompted!(Decimal, Decimal);
prompted!(bool, Boolean);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kinds() {
        assert_eq!(Value::Text("x".into()).kind(), ValueKind::Text);
        assert_eq!(Value::Integer(4).kind(), ValueKind::Integer);
        assert_eq!(Value::Boolean(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::Decimal(Decimal::ONE).kind(), ValueKind::Decimal);
    }

    #[test]
    fn from_value_matches_variant() {
        assert_eq!(i64::from_value(Value::Integer(4)), Some(4));
        assert_eq!(i64::from_value(Value::Text("4".into())), None);
        assert_eq!(bool::from_value(Value::Boolean(false)), Some(false));
        assert_eq!(
            String::from_value(Value::Text("hi".into())),
            Some("hi".to_string())
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(ValueKind::Integer.to_string(), "a whole number");
        assert_eq!(ValueKind::Named("direction".into()).to_string(), "direction");
    }
}
