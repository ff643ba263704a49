//! HTTP client for a running `/api/chat` endpoint.
//!
//! Used by the terminal chat widget. Mirrors what the browser widget does:
//! posts `{message, session}`, reads the body as text, treats any non-2xx
//! status as an error carrying the raw body, and falls back to the raw text
//! when the body is not the expected JSON.

use std::time::Duration;

use serde_json::Value;

use folio_types::chat::ChatRequest;
use folio_types::error::ClientError;

/// Shown when the server answered 2xx without any reply text.
pub const NO_REPLY: &str = "(No reply)";

/// Posts chat messages to a folio server.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    session: String,
}

impl ChatClient {
    /// Create a client for `endpoint` (the full `/api/chat` URL).
    pub fn new(
        endpoint: impl Into<String>,
        session: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            session: session.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message and return the reply text.
    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        let body = ChatRequest {
            message: message.to_string(),
            session: Some(self.session.clone()),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: raw,
            });
        }

        Ok(parse_reply(&raw))
    }
}

/// Extract the reply from a 2xx body.
pub fn parse_reply(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => match value.get("reply") {
            Some(Value::String(reply)) => reply.clone(),
            Some(Value::Null) | None => NO_REPLY.to_string(),
            Some(other) => other.to_string(),
        },
        Err(_) if raw.is_empty() => NO_REPLY.to_string(),
        Err(_) => raw.to_string(),
    }
}
