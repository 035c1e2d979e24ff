// src/pipeline/translate.rs

//! Homework record to chat message translation.

use crate::error::{AppError, Result};
use crate::models::{HomeworkRecord, MessageConfig, VerdictTable};

const NAME_KEY: &str = "homework_name";
const STATUS_KEY: &str = "status";

/// Turns homework records into status change messages.
///
/// Built once at startup; translation itself has no side effects.
#[derive(Debug, Clone)]
pub struct StatusTranslator {
    verdicts: VerdictTable,
    template: MessageConfig,
}

impl StatusTranslator {
    pub fn new(messages: &MessageConfig) -> Self {
        Self {
            verdicts: VerdictTable::new(&messages.verdicts),
            template: messages.clone(),
        }
    }

    /// Extract the homework name.
    pub fn homework_name<'a>(&self, record: &'a HomeworkRecord) -> Result<&'a str> {
        if !record.is_object() {
            return Err(AppError::type_error("homework record is not an object"));
        }
        if !record.has_field(NAME_KEY) {
            return Err(AppError::MissingField(NAME_KEY));
        }
        record
            .field(NAME_KEY)
            .ok_or_else(|| AppError::type_error("homework_name is not a string"))
    }

    /// Build the status change message for `record`.
    pub fn translate(&self, record: &HomeworkRecord) -> Result<String> {
        let name = self.homework_name(record)?;
        let status = record.field(STATUS_KEY);
        let verdict = status
            .and_then(|code| self.verdicts.lookup(code))
            .ok_or_else(|| AppError::UnknownStatus(status.map(str::to_string)))?;

        Ok(self.template.format_status_change(name, verdict))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{HomeworkStatus, VerdictConfig};

    fn translator() -> StatusTranslator {
        StatusTranslator::new(&MessageConfig::default())
    }

    fn record(value: serde_json::Value) -> HomeworkRecord {
        HomeworkRecord::new(value)
    }

    #[test]
    fn test_every_known_status_has_its_verdict() {
        let translator = translator();
        let table = VerdictTable::new(&VerdictConfig::default());

        for status in HomeworkStatus::ALL {
            let message = translator
                .translate(&record(json!({
                    "homework_name": "hw05_final",
                    "status": status.as_str()
                })))
                .unwrap();
            assert!(message.contains("hw05_final"));
            assert!(message.contains(table.verdict(status)));
        }
    }

    #[test]
    fn test_unknown_status() {
        let err = translator()
            .translate(&record(json!({"homework_name": "hw1", "status": "graded"})))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownStatus(Some(ref s)) if s == "graded"));
    }

    #[test]
    fn test_missing_status() {
        let err = translator()
            .translate(&record(json!({"homework_name": "hw1"})))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownStatus(None)));
    }

    #[test]
    fn test_missing_name() {
        let err = translator()
            .translate(&record(json!({"status": "approved"})))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField("homework_name")));
    }

    #[test]
    fn test_record_not_an_object() {
        let err = translator().translate(&record(json!("hw1"))).unwrap_err();
        assert!(matches!(err, AppError::Type(_)));
    }

    #[test]
    fn test_custom_template() {
        let messages = MessageConfig {
            status_changed: "{name}: {verdict}".to_string(),
            ..MessageConfig::default()
        };
        let message = StatusTranslator::new(&messages)
            .translate(&record(json!({"homework_name": "hw1", "status": "rejected"})))
            .unwrap();
        assert_eq!(message, format!("hw1: {}", messages.verdicts.rejected));
    }
}
