//! Runtime value types for Verdict expressions
//!
//! The `Value` enum represents every value the engine can compute or read
//! from an input record. `Null` doubles as the "undefined" sentinel: a
//! missing attribute or an invalid temporal result resolves to `Null` and
//! propagates (comparisons against it are false, arithmetic with it stays
//! `Null`) instead of raising an error.

use serde::{Deserialize, Serialize};

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null / undefined value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Truthiness under the host-language rules the stored rules were
    /// authored against: `Null` is false, `0` and NaN are false, any other
    /// number is true, a string is true unless empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }

    /// Numeric view of the value. Numeric strings coerce; everything else
    /// is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// String view of the value, without coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(Value::Number(100_000.0).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::String("employed".to_string()).is_truthy());
    }

    #[test]
    fn test_as_number_coerces_numeric_strings() {
        assert_eq!(Value::Number(12.0).as_number(), Some(12.0));
        assert_eq!(Value::String("750".to_string()).as_number(), Some(750.0));
        assert_eq!(Value::String("not a number".to_string()).as_number(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_value_serde_untagged() {
        let val: Value = serde_json::from_str("800").unwrap();
        assert_eq!(val, Value::Number(800.0));

        let val: Value = serde_json::from_str("\"employed\"").unwrap();
        assert_eq!(val, Value::String("employed".to_string()));

        let val: Value = serde_json::from_str("null").unwrap();
        assert_eq!(val, Value::Null);

        let json = serde_json::to_string(&Value::Bool(true)).unwrap();
        assert_eq!(json, "true");
    }
}
