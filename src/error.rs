// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::message::ErrorResponse;

/// Proxy-level failures. Every variant is reported to the caller as a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Backend unreachable or answered with something that is not JSON.
    /// The caller only ever sees the fixed message.
    #[error("Proxy error")]
    Backend(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Backend(e) => warn!(error = %e, "backend request failed"),
            Self::InvalidBody(e) => warn!(error = %e, "rejected request body"),
        }
        let body = Json(ErrorResponse { error: self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Failures of the client's call to the proxy.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Transport(String),
}

impl ClientError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
