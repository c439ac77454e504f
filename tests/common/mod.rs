#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use leave_chat::{config::AppConfig, routes::create_router, state::AppState};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn proxy_app(api_base: &str) -> Router {
    let config = AppConfig {
        api_base: api_base.to_string(),
        ..Default::default()
    };
    create_router().with_state(Arc::new(AppState::new(&config)))
}
