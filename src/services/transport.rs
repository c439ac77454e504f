// src/services/transport.rs
use async_trait::async_trait;

use crate::config::normalize_base;
use crate::error::ClientError;
use crate::message::{ChatRequest, ChatResponse};

/// Channel from the chat client to the proxy endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

/// Posts chat requests to a running proxy over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", normalize_base(proxy_url)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    // Any JSON body is accepted whatever the status; the proxy reports errors in it.
    async fn post(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice::<ChatResponse>(&body).map_err(|e| {
            if status.is_success() {
                ClientError::transport(format!("invalid response from proxy: {e}"))
            } else {
                ClientError::transport(format!("proxy returned {status}"))
            }
        })
    }
}
