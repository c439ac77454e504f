use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::info;

use crate::{error::AppError, state::SharedState};

/// Relays a chat payload to the backend and mirrors its status and body.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;

    let (status, data) = state.backend.forward(&payload).await?;
    info!(%status, "relayed backend response");

    Ok((status, Json(data)).into_response())
}
