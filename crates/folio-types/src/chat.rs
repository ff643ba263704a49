//! Chat message, request/reply, and mode types for folio.
//!
//! The HTTP contract is `POST /api/chat` with a [`ChatRequest`] body,
//! answered by a [`ChatReply`] or an [`ErrorBody`]. [`ChatMessage`] and
//! [`Transcript`] model the client-side conversation log; the server never
//! stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message in a client-side conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// Append-only conversation log; messages stay in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Start a transcript with the bot's welcome message.
    pub fn with_welcome(welcome: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::bot(welcome)],
        }
    }

    /// Append a message and return a reference to it.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // Just pushed, so the vector is non-empty.
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Body of `POST /api/chat`.
///
/// `message` defaults to the empty string when missing or `null`. `session`
/// is an opaque client token; the server accepts it but does not track
/// sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error body. `error` is a plain string for local failures and the
/// upstream payload for passthrough failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: serde_json::Value,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: serde_json::Value::String(message.into()),
        }
    }
}

/// Whether replies are fabricated locally or relayed from the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Mock,
    Live,
}

impl ChatMode {
    /// Mock when forced, or when there is no upstream credential.
    pub fn select(force_mock: bool, has_credential: bool) -> Self {
        if force_mock || !has_credential {
            ChatMode::Mock
        } else {
            ChatMode::Live
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::Mock => write!(f, "mock"),
            ChatMode::Live => write!(f, "live"),
        }
    }
}
