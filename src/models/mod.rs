// src/models/mod.rs

//! Domain models for the homework bot.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod credentials;
mod homework;
mod report;
mod verdict;

// Re-export all public types
pub use config::{
    ApiConfig, Config, LoggingConfig, MessageConfig, PollingConfig, TelegramConfig, VerdictConfig,
};
pub use credentials::{Credentials, PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};
pub use homework::{HomeworkRecord, PollResponse};
pub use report::Report;
pub use verdict::{HomeworkStatus, VerdictTable};
