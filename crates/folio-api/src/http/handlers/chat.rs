//! Chat endpoint.
//!
//! `/api/chat` is routed for every method so that the 405 carries the same
//! JSON error body as every other failure. Only POST reaches the service.
//!
//! Body: `{ "message": string, "session"?: string }`. An empty body is the
//! same as `{}`, which is answered as an empty message.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;

use folio_types::chat::{ChatReply, ChatRequest};

use crate::http::error::{AppError, INVALID_BODY};
use crate::state::AppState;

/// POST /api/chat - Answer one message.
pub async fn chat(
    method: Method,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let request = parse_body(&body)?;
    if let Some(session) = request.session.as_deref() {
        tracing::debug!(session, "chat request");
    }

    let reply = state.chat_service.reply(&request.message).await?;
    Ok(Json(ChatReply { reply }))
}

fn parse_body(body: &[u8]) -> Result<ChatRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting chat body");
        AppError::BadRequest(INVALID_BODY.to_string())
    })
}
