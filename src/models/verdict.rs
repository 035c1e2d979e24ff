//! Review statuses and their display texts.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::VerdictConfig;

/// Review status reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::UnknownStatus(Some(s.to_string())))
    }
}

/// Immutable status to verdict text mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    approved: String,
    reviewing: String,
    rejected: String,
}

impl VerdictTable {
    pub fn new(config: &VerdictConfig) -> Self {
        Self {
            approved: config.approved.clone(),
            reviewing: config.reviewing.clone(),
            rejected: config.rejected.clone(),
        }
    }

    /// Verdict text for a known status.
    pub fn verdict(&self, status: HomeworkStatus) -> &str {
        match status {
            HomeworkStatus::Approved => &self.approved,
            HomeworkStatus::Reviewing => &self.reviewing,
            HomeworkStatus::Rejected => &self.rejected,
        }
    }

    /// Verdict text for a raw status code.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        code.parse().ok().map(|status| self.verdict(status))
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        Self::new(&VerdictConfig::default())
    }
}
