use thiserror::Error;

/// Errors produced while answering a chat message.
///
/// There is no rate-limit variant: the chat service turns a 429 into a
/// normal reply before it reaches this type.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("upstream returned HTTP {status}")]
    Upstream {
        status: u16,
        payload: serde_json::Value,
    },

    #[error("upstream request timed out")]
    UpstreamTimeout,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors from the HTTP chat client used by the terminal widget.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response; `body` is the raw response text.
    #[error("API {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_matches_widget_format() {
        let err = ClientError::Api {
            status: 502,
            body: r#"{"error":"bad gateway"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API 502: {"error":"bad gateway"}"#);
    }

    #[test]
    fn test_chat_error_display_hides_payload() {
        let err = ChatError::Upstream {
            status: 401,
            payload: serde_json::json!({"message": "secret detail"}),
        };
        assert_eq!(err.to_string(), "upstream returned HTTP 401");
    }
}
