//! Integer-like registration inputs (priority and accepted-args count).
//!
//! Registration accepts loosely typed numeric settings, e.g. values read from
//! a config file or an untyped payload. Anything that does not denote an
//! unsigned integer fitting in `u32` is treated as invalid, and the registry
//! substitutes its default instead of rejecting the registration.

use std::fmt;

/// A numeric registration setting as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericInput {
    /// A valid unsigned integer.
    Unsigned(u32),
    /// Anything else: negative, fractional, overflowing, or non-numeric.
    Invalid,
}

impl NumericInput {
    /// Parse a string the way a strict `^[0-9]+$` match would.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Invalid;
        }
        raw.parse::<u32>().map_or(Self::Invalid, Self::Unsigned)
    }

    /// Returns the value, or `fallback` when the input is invalid.
    pub fn resolve(self, fallback: u32) -> u32 {
        match self {
            Self::Unsigned(value) => value,
            Self::Invalid => fallback,
        }
    }

    /// Returns whether the input denotes a valid unsigned integer.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Unsigned(_))
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Invalid => write!(f, "<invalid>"),
        }
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Unsigned(value)
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        u32::try_from(value).map_or(Self::Invalid, Self::Unsigned)
    }
}

impl From<usize> for NumericInput {
    fn from(value: usize) -> Self {
        u32::try_from(value).map_or(Self::Invalid, Self::Unsigned)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        u32::try_from(value).map_or(Self::Invalid, Self::Unsigned)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        u32::try_from(value).map_or(Self::Invalid, Self::Unsigned)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&serde_json::Value> for NumericInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => number.as_u64().map_or(Self::Invalid, Self::from),
            serde_json::Value::String(raw) => Self::parse(raw),
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_digits() {
        assert_eq!(NumericInput::parse("5"), NumericInput::Unsigned(5));
        assert_eq!(NumericInput::parse("007"), NumericInput::Unsigned(7));
        assert_eq!(NumericInput::parse("0"), NumericInput::Unsigned(0));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for raw in ["", "abc", "-1", "+3", "1.5", " 10", "10 ", "1e3"] {
            assert_eq!(NumericInput::parse(raw), NumericInput::Invalid, "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(NumericInput::parse("99999999999"), NumericInput::Invalid);
    }

    #[test]
    fn test_signed_inputs() {
        assert_eq!(NumericInput::from(-5_i32), NumericInput::Invalid);
        assert_eq!(NumericInput::from(20_i64), NumericInput::Unsigned(20));
    }

    #[test]
    fn test_json_inputs() {
        assert_eq!(NumericInput::from(&json!(3)), NumericInput::Unsigned(3));
        assert_eq!(NumericInput::from(&json!("12")), NumericInput::Unsigned(12));
        assert_eq!(NumericInput::from(&json!(-3)), NumericInput::Invalid);
        assert_eq!(NumericInput::from(&json!(2.5)), NumericInput::Invalid);
        assert_eq!(NumericInput::from(&json!(null)), NumericInput::Invalid);
        assert_eq!(NumericInput::from(&json!([1])), NumericInput::Invalid);
    }

    #[test]
    fn test_resolve_uses_fallback_only_when_invalid() {
        assert_eq!(NumericInput::Unsigned(0).resolve(10), 0);
        assert_eq!(NumericInput::Invalid.resolve(10), 10);
    }
}
