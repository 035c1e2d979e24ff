// src/services/api.rs

//! Homework review API client.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;
use crate::utils::truncate;

/// Longest response body excerpt kept in error messages.
const BODY_EXCERPT_CHARS: usize = 200;

/// Source of raw homework status responses.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch homework statuses changed since `from_date`.
    ///
    /// A non-positive `from_date` means "now". The parsed body is returned
    /// without any shape checks.
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Client for the Practicum homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Create a new client for the configured endpoint.
    pub fn new(client: Client, config: &ApiConfig, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: Url::parse(&config.endpoint)?,
            token: token.into(),
        })
    }

    /// Request parameters for diagnostics. Never includes the token.
    fn request_context(&self, from_date: i64) -> String {
        format!("url = {}, params = from_date={}", self.endpoint, from_date)
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };
        let context = self.request_context(from_date);
        log::info!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| AppError::connection(&context, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::connection(
                context,
                format!(
                    "status {}, reason: {}, body: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown"),
                    truncate(body.trim(), BODY_EXCERPT_CHARS)
                ),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::connection(context, e))
    }
}
