// src/error.rs

//! Unified error handling for the homework bot.

use std::fmt;

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Homework API request failed or answered with a non-200 status
    #[error("Homework API request failed ({context}): {message}")]
    Connection { context: String, message: String },

    /// API response lacks one of its required keys
    #[error("Homework API returned an empty response: no '{0}' key")]
    EmptyResponse(&'static str),

    /// Response or one of its fields has the wrong shape
    #[error("Unexpected response type: {0}")]
    Type(String),

    /// Homework record lacks a required key
    #[error("Homework record has no '{0}' key")]
    MissingField(&'static str),

    /// Homework status is absent or not in the verdict table
    #[error("Unknown homework status: {}", display_status(.0))]
    UnknownStatus(Option<String>),

    /// Chat message could not be delivered
    #[error("Failed to send message: {0}")]
    Notification(String),

    /// Missing credentials or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration value out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

fn display_status(status: &Option<String>) -> &str {
    status.as_deref().unwrap_or("<missing>")
}

impl AppError {
    /// Create a connection error with request context.
    pub fn connection(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Connection {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a type error.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }

    /// Create a notification error.
    pub fn notification(message: impl fmt::Display) -> Self {
        Self::Notification(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
