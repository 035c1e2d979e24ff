//! Secrets read from the process environment or a `.env` file.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{AppError, Result};

/// Environment variable holding the homework API token.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Default env file, relative to the working directory.
pub const ENV_FILE: &str = ".env";

/// Tokens and identifiers the bot cannot start without.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read all credentials from the process environment, falling back to
    /// `.env` in the working directory.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup_and_file(|key| std::env::var(key).ok(), ENV_FILE)
    }

    /// Read all credentials through `lookup`, falling back to the env file at
    /// `path` for names `lookup` leaves blank. A missing file is not an error.
    pub fn from_lookup_and_file(
        lookup: impl Fn(&str) -> Option<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file = read_env_file(path.as_ref())?;
        Self::from_lookup(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| file.get(key).cloned())
        })
    }

    /// Read all credentials through `lookup`.
    ///
    /// Blank values count as missing. Every missing name is listed in the
    /// returned error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let credentials = Self {
            practicum_token: read(PRACTICUM_TOKEN),
            telegram_token: read(TELEGRAM_TOKEN),
            telegram_chat_id: read(TELEGRAM_CHAT_ID),
        };

        if !missing.is_empty() {
            return Err(AppError::config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }
        Ok(credentials)
    }
}

/// Parse a dotenv file into a map. Returns an empty map when it does not exist.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => {
            return Err(AppError::config(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    iter.map(|item| {
        item.map_err(|e| AppError::config(format!("Invalid line in {}: {}", path.display(), e)))
    })
    .collect()
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_all_present() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN, "p-token"),
            (TELEGRAM_TOKEN, "t-token"),
            (TELEGRAM_CHAT_ID, " 12345 "),
        ]))
        .unwrap();

        assert_eq!(credentials.practicum_token, "p-token");
        assert_eq!(credentials.telegram_chat_id, "12345");
    }

    #[test]
    fn test_missing_and_blank_are_reported() {
        let err = Credentials::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN, "p-token"),
            (TELEGRAM_TOKEN, "   "),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        let text = err.to_string();
        assert!(text.contains(TELEGRAM_TOKEN));
        assert!(text.contains(TELEGRAM_CHAT_ID));
        assert!(!text.contains(PRACTICUM_TOKEN));
    }

    #[test]
    fn test_env_file_fills_gaps_and_env_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "PRACTICUM_TOKEN=file-practicum\nTELEGRAM_TOKEN=file-telegram\nTELEGRAM_CHAT_ID=7"
        )
        .unwrap();

        let credentials = Credentials::from_lookup_and_file(
            lookup_from(&[(PRACTICUM_TOKEN, "env-practicum"), (TELEGRAM_TOKEN, "  ")]),
            file.path(),
        )
        .unwrap();

        assert_eq!(credentials.practicum_token, "env-practicum");
        assert_eq!(credentials.telegram_token, "file-telegram");
        assert_eq!(credentials.telegram_chat_id, "7");
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::from_lookup_and_file(
            lookup_from(&[(PRACTICUM_TOKEN, "p"), (TELEGRAM_TOKEN, "t")]),
            dir.path().join(".env"),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(TELEGRAM_CHAT_ID));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let credentials = Credentials {
            practicum_token: "secret-1".into(),
            telegram_token: "secret-2".into(),
            telegram_chat_id: "42".into(),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("42"));
    }
}
