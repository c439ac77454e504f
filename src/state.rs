// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::backend::BackendClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backend: BackendClient::new(&config.api_base),
        }
    }
}
