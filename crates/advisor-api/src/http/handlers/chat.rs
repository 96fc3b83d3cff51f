//! Chat relay endpoint.
//!
//! POST /api/chat
//!
//! Body: `{"messages": [{"role": "...", "content": "..."}, ...]}`.
//! Returns `{"text": "..."}` or `{"error": "..."}`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use advisor_types::chat::{RelayReply, RelayRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- relay the transcript and return the generated reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Json<RelayReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    tracing::info!(messages = request.messages.len(), "chat request received");

    let text = state.relay.relay(&request).await?;
    Ok(Json(RelayReply { text }))
}
