//! Evaluation context
//!
//! Owns the immutable input record and the evaluation-time clock. The
//! clock is captured once at construction so every temporal expression in
//! a single evaluation sees the same instant; tests pin it with
//! [`EvalContext::with_now`].

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use verdict_core::Value;

/// Immutable per-evaluation state
#[derive(Debug, Clone)]
pub struct EvalContext {
    record: HashMap<String, Value>,
    now: DateTime<Utc>,
}

impl EvalContext {
    /// Create a context over an input record, capturing the current time.
    pub fn new(record: HashMap<String, Value>) -> Self {
        Self {
            record,
            now: Utc::now(),
        }
    }

    /// Pin the evaluation clock to a fixed instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Look up an input attribute.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.record.get(attribute)
    }

    /// Whether the record carries the attribute at all. Presence is what
    /// decides attribute-vs-literal precedence, not truthiness.
    pub fn contains(&self, attribute: &str) -> bool {
        self.record.contains_key(attribute)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn record(&self) -> &HashMap<String, Value> {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let ctx = EvalContext::new(HashMap::new()).with_now(now);
        assert_eq!(ctx.now(), now);
    }

    #[test]
    fn test_lookup() {
        let mut record = HashMap::new();
        record.insert("credit_score".to_string(), Value::Number(800.0));
        record.insert("zero".to_string(), Value::Number(0.0));
        let ctx = EvalContext::new(record);

        assert_eq!(ctx.get("credit_score"), Some(&Value::Number(800.0)));
        assert!(ctx.contains("zero"));
        assert!(!ctx.contains("missing"));
    }
}
