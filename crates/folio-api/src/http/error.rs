//! Application error type mapping to HTTP status codes and `{error}` bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use folio_types::chat::ErrorBody;
use folio_types::error::ChatError;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_BODY: &str = "Invalid request body";
pub const UPSTREAM_TIMEOUT: &str = "Upstream request timed out";
pub const INTERNAL_ERROR: &str = "Internal error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Anything but POST on the chat endpoint.
    MethodNotAllowed,
    /// Body or message rejected before any work is done.
    BadRequest(String),
    /// Upstream non-2xx relayed as-is.
    Upstream { status: u16, payload: Value },
    /// Upstream did not answer within the configured timeout.
    GatewayTimeout,
    /// Anything unexpected. The detail is logged, never returned.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::InvalidRequest(msg) => AppError::BadRequest(msg),
            ChatError::Upstream { status, payload } => AppError::Upstream { status, payload },
            ChatError::UpstreamTimeout => AppError::GatewayTimeout,
            ChatError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::message(METHOD_NOT_ALLOWED),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            AppError::Upstream { status, payload } => {
                let status = StatusCode::from_u16(status).unwrap_or_else(|_| {
                    tracing::warn!(status, "upstream status is not a valid HTTP status");
                    StatusCode::INTERNAL_SERVER_ERROR
                });
                (status, ErrorBody { error: payload })
            }
            AppError::GatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorBody::message(UPSTREAM_TIMEOUT),
            ),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message(INTERNAL_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
