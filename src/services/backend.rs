// src/services/backend.rs
use axum::http::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::config::normalize_base;
use crate::error::AppError;

/// Forwards chat payloads to the leave-management backend.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    chat_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            chat_url: format!("{}/chat", normalize_base(base_url)),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Posts `body` unmodified and returns the backend's status and JSON body.
    pub async fn forward(&self, body: &Value) -> Result<(StatusCode, Value), AppError> {
        debug!(url = %self.chat_url, "forwarding chat request");
        let response = self.http.post(&self.chat_url).json(body).send().await?;
        let status = response.status();
        let data = response.json::<Value>().await?;
        debug!(%status, "backend responded");
        Ok((status, data))
    }
}
