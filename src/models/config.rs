//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Homework review API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Telegram Bot API settings
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Poll loop timing
    #[serde(default)]
    pub polling: PollingConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Texts sent to the chat
    #[serde(default)]
    pub messages: MessageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        validate_http_url("api.endpoint", &self.api.endpoint)?;
        validate_http_url("telegram.api_url", &self.telegram.api_url)?;

        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.telegram.timeout_secs == 0 {
            return Err(AppError::validation("telegram.timeout_secs must be > 0"));
        }
        if self.polling.retry_period_secs == 0 {
            return Err(AppError::validation(
                "polling.retry_period_secs must be > 0",
            ));
        }

        let messages = &self.messages;
        if !messages.status_changed.contains("{name}")
            || !messages.status_changed.contains("{verdict}")
        {
            return Err(AppError::validation(
                "messages.status_changed must contain {name} and {verdict}",
            ));
        }
        if !messages.error.contains("{error}") {
            return Err(AppError::validation("messages.error must contain {error}"));
        }
        if messages.no_change.trim().is_empty() {
            return Err(AppError::validation("messages.no_change is empty"));
        }
        for (status, text) in [
            ("approved", &messages.verdicts.approved),
            ("reviewing", &messages.verdicts.reviewing),
            ("rejected", &messages.verdicts.rejected),
        ] {
            if text.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "messages.verdicts.{status} is empty"
                )));
            }
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::validation(format!("{field} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation(format!(
            "{field} must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(())
}

/// Homework review API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Homework statuses endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Telegram Bot API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL
    #[serde(default = "defaults::telegram_api_url")]
    pub api_url: String,

    /// Send timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::telegram_api_url(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Poll loop timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Delay between two poll cycles in seconds
    #[serde(default = "defaults::retry_period")]
    pub retry_period_secs: u64,
}

impl PollingConfig {
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            retry_period_secs: defaults::retry_period(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (overridden by `RUST_LOG`)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Texts sent to the chat.
///
/// Supported placeholders:
/// - `status_changed`: `{name}`, `{verdict}`
/// - `error`: `{error}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "defaults::status_changed")]
    pub status_changed: String,

    /// Sent when the API reports no new homework statuses
    #[serde(default = "defaults::no_change")]
    pub no_change: String,

    #[serde(default = "defaults::error")]
    pub error: String,

    /// Verdict text per review status
    #[serde(default)]
    pub verdicts: VerdictConfig,
}

impl MessageConfig {
    /// Render a status change message.
    pub fn format_status_change(&self, name: &str, verdict: &str) -> String {
        self.status_changed
            .replace("{name}", name)
            .replace("{verdict}", verdict)
    }

    /// Render an error report.
    pub fn format_error(&self, error: &AppError) -> String {
        self.error.replace("{error}", &error.to_string())
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            status_changed: defaults::status_changed(),
            no_change: defaults::no_change(),
            error: defaults::error(),
            verdicts: VerdictConfig::default(),
        }
    }
}

/// Verdict text per review status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictConfig {
    #[serde(default = "defaults::approved")]
    pub approved: String,

    #[serde(default = "defaults::reviewing")]
    pub reviewing: String,

    #[serde(default = "defaults::rejected")]
    pub rejected: String,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            approved: defaults::approved(),
            reviewing: defaults::reviewing(),
            rejected: defaults::rejected(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn endpoint() -> String {
        "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        concat!("homework-bot/", env!("CARGO_PKG_VERSION")).into()
    }

    // Telegram defaults
    pub fn telegram_api_url() -> String {
        "https://api.telegram.org".into()
    }

    // Polling defaults
    pub fn retry_period() -> u64 {
        600
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Message defaults
    pub fn status_changed() -> String {
        "Изменился статус проверки работы \"{name}\". {verdict}".into()
    }
    pub fn no_change() -> String {
        "Статус не изменился".into()
    }
    pub fn error() -> String {
        "Ошибка: {error}.".into()
    }

    // Verdict defaults
    pub fn approved() -> String {
        "Работа проверена: ревьюеру всё понравилось. Ура!".into()
    }
    pub fn reviewing() -> String {
        "Работа взята на проверку ревьюером.".into()
    }
    pub fn rejected() -> String {
        "Работа проверена: у ревьюера есть замечания.".into()
    }
}
