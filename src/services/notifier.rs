// src/services/notifier.rs

//! Chat notification delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Credentials, TelegramConfig};

/// Destination for user-facing messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message. Any delivery failure is an
    /// [`AppError::Notification`].
    async fn send(&self, message: &str) -> Result<()>;
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages to a single chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    send_url: Url,
    chat_id: String,
    timeout: Duration,
}

impl TelegramNotifier {
    /// Create a notifier for the chat named in `credentials`.
    pub fn new(client: Client, config: &TelegramConfig, credentials: &Credentials) -> Result<Self> {
        let mut base = Url::parse(&config.api_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        // Tokens look like `<id>:<secret>`; the leading `./` stops the join
        // from reading `bot<id>:` as a URL scheme.
        let send_url = base.join(&format!("./bot{}/sendMessage", credentials.telegram_token))?;

        Ok(Self {
            client,
            send_url,
            chat_id: credentials.telegram_chat_id.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        log::debug!("Sending message to chat {}", self.chat_id);

        // The request URL embeds the bot token; keep it out of error text.
        let response = self
            .client
            .post(self.send_url.clone())
            .timeout(self.timeout)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text: message,
            })
            .send()
            .await
            .map_err(|e| AppError::notification(e.without_url()))?;

        let status = response.status();
        let reply: ApiReply = response.json().await.map_err(|e| {
            AppError::notification(format!("status {}: {}", status.as_u16(), e.without_url()))
        })?;

        if !status.is_success() || !reply.ok {
            return Err(AppError::notification(format!(
                "status {}: {}",
                status.as_u16(),
                reply.description.as_deref().unwrap_or("no description")
            )));
        }

        log::debug!("Message delivered to chat {}", self.chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_server::{json_response, serve_once};

    fn credentials() -> Credentials {
        Credentials {
            practicum_token: "p-token".into(),
            telegram_token: "123:bot-secret".into(),
            telegram_chat_id: "42".into(),
        }
    }

    fn notifier_for(api_url: String) -> TelegramNotifier {
        let config = TelegramConfig {
            api_url,
            ..TelegramConfig::default()
        };
        TelegramNotifier::new(Client::new(), &config, &credentials()).unwrap()
    }

    #[test]
    fn test_send_url_keeps_base_path() {
        let notifier = notifier_for("https://proxy.example.com/telegram".to_string());
        assert_eq!(
            notifier.send_url.as_str(),
            "https://proxy.example.com/telegram/bot123:bot-secret/sendMessage"
        );

        let notifier = notifier_for("https://api.telegram.org".to_string());
        assert_eq!(
            notifier.send_url.as_str(),
            "https://api.telegram.org/bot123:bot-secret/sendMessage"
        );
    }

    #[tokio::test]
    async fn test_send_posts_chat_and_text() {
        let (base, request) = serve_once(json_response("200 OK", r#"{"ok": true, "result": {}}"#));
        let notifier = notifier_for(base);

        notifier.send("hello").await.unwrap();

        let request = request.join().unwrap();
        assert!(request.starts_with("POST /bot123:bot-secret/sendMessage "));
        assert!(request.contains(r#""chat_id":"42""#));
        assert!(request.contains(r#""text":"hello""#));
    }

    #[tokio::test]
    async fn test_api_rejection_is_notification_error() {
        let body = r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#;
        let (base, request) = serve_once(json_response("400 Bad Request", body));
        let notifier = notifier_for(base);

        let err = notifier.send("hello").await.unwrap_err();
        request.join().unwrap();

        assert!(matches!(err, AppError::Notification(_)));
        assert!(err.to_string().contains("chat not found"));
        assert!(!err.to_string().contains("bot-secret"));
    }
}
