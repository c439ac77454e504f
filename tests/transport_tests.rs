mod common;

use axum::{Json, Router, routing::post};
use leave_chat::message::ChatRequest;
use leave_chat::services::session::ChatSession;
use leave_chat::services::transport::HttpTransport;
use serde_json::json;

use common::{dead_url, proxy_app, spawn_server};

/// Backend that echoes which employee id and intent it was given.
fn echo_backend() -> Router {
    Router::new().route(
        "/chat",
        post(|Json(req): Json<ChatRequest>| async move {
            let id = req.employee_id.unwrap_or_else(|| "none".to_string());
            let intent = if req.intent.is_some() { "balance" } else { "free" };
            Json(json!({ "reply": format!("{intent}:{id}:{}", req.message) }))
        }),
    )
}

#[tokio::test]
async fn test_full_round_trip_through_proxy() {
    let backend = spawn_server(echo_backend()).await;
    let proxy = spawn_server(proxy_app(&backend)).await;
    let transport = HttpTransport::new(&proxy);
    let mut session = ChatSession::new();

    session.set_input("my id is e001");
    session.send(&transport).await;
    assert_eq!(session.messages().last().unwrap().text, "free:E001:my id is e001");

    session.request_balance(&transport).await;
    assert_eq!(
        session.messages().last().unwrap().text,
        "balance:E001:leave balance"
    );
}

#[tokio::test]
async fn test_backend_error_body_is_rendered() {
    let backend = Router::new().route(
        "/chat",
        post(|| async {
            (
                axum::http::StatusCode::NOT_FOUND,
                Json(json!({ "error": "employee not found" })),
            )
        }),
    );
    let backend = spawn_server(backend).await;
    let proxy = spawn_server(proxy_app(&backend)).await;
    let mut session = ChatSession::new();

    session.set_input("E999 balance");
    session.send(&HttpTransport::new(&proxy)).await;

    assert_eq!(session.messages().last().unwrap().text, "employee not found");
}

#[tokio::test]
async fn test_unreachable_proxy_renders_error() {
    let transport = HttpTransport::new(&dead_url().await);
    let mut session = ChatSession::new();

    session.set_input("hello");
    session.send(&transport).await;

    let last = &session.messages().last().unwrap().text;
    assert!(last.starts_with("Error: "), "got {last}");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_non_json_proxy_reply_names_the_status() {
    let proxy = Router::new()
        .route(
            "/api/chat",
            post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
        )
        .route("/ok/api/chat", post(|| async { "plain text" }));
    let proxy = spawn_server(proxy).await;
    let mut session = ChatSession::new();

    session.set_input("hello");
    session.send(&HttpTransport::new(&proxy)).await;
    assert_eq!(
        session.messages().last().unwrap().text,
        "Error: proxy returned 502 Bad Gateway"
    );

    session.set_input("hello");
    session.send(&HttpTransport::new(&format!("{proxy}/ok"))).await;
    assert!(
        session
            .messages()
            .last()
            .unwrap()
            .text
            .starts_with("Error: invalid response from proxy: ")
    );
}

#[test]
fn test_endpoint_targets_api_chat() {
    assert_eq!(
        HttpTransport::new("http://127.0.0.1:3000/").endpoint(),
        "http://127.0.0.1:3000/api/chat"
    );
}
