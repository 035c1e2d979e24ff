//! Homework API payloads.

use serde_json::Value;

/// A validated homework API response.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    /// Homework records, newest first; empty when nothing changed
    pub homeworks: Vec<HomeworkRecord>,

    /// Cursor for the next request
    pub current_date: i64,
}

/// A single homework record as sent by the API.
///
/// Kept as raw JSON so that missing or malformed fields can be reported
/// individually during translation.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkRecord(Value);

impl HomeworkRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Get a string field, if present and a string.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Check whether the record carries `key` at all.
    pub fn has_field(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    /// Whether the record is a JSON object.
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }
}

impl From<Value> for HomeworkRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
