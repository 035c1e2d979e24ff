// src/pipeline/detect.rs

//! Change detection over consecutive poll cycles.
//!
//! The reporter keeps two slots: `current`, rebuilt piece by piece during a
//! cycle, and `previous`, the last report that actually reached the chat.
//! Verdicts, "no change" texts and error descriptions all go through the same
//! pair, so each distinct message is sent once no matter where it came from.

use crate::models::Report;

/// Two-slot memo deciding whether a report is worth sending.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    current: Report,
    previous: Option<Report>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the homework name seen in this cycle.
    ///
    /// The name persists into later cycles until another record replaces it.
    pub fn record_name(&mut self, name: impl Into<String>) {
        self.current.name = Some(name.into());
    }

    /// Set the message this cycle would send.
    pub fn record_message(&mut self, message: impl Into<String>) {
        self.current.message = message.into();
    }

    /// The current report, if it differs from the last one sent.
    pub fn pending(&self) -> Option<&Report> {
        match &self.previous {
            Some(previous) if *previous == self.current => None,
            _ => Some(&self.current),
        }
    }

    /// Record that the current report reached the chat.
    pub fn mark_sent(&mut self) {
        self.previous = Some(self.current.clone());
    }

    pub fn current(&self) -> &Report {
        &self.current
    }

    pub fn previous(&self) -> Option<&Report> {
        self.previous.as_ref()
    }
}
