// src/config.rs
use std::env;

use tracing::debug;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8001";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

/// Settings for the proxy server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the leave-management backend, without trailing slash.
    pub api_base: String,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = Self {
            api_base: normalize_base(&env_or("LEAVE_API_BASE", DEFAULT_API_BASE)),
            bind_addr: env_or("LEAVE_CHAT_ADDR", DEFAULT_BIND_ADDR),
        };
        debug!(?config, "loaded proxy configuration");
        config
    }
}

/// Settings for the terminal chat client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub proxy_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { proxy_url: DEFAULT_PROXY_URL.to_string() }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            proxy_url: normalize_base(&env_or("LEAVE_CHAT_URL", DEFAULT_PROXY_URL)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
