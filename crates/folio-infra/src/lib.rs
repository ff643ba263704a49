//! Infrastructure layer for folio.
//!
//! Concrete implementations behind the `folio-core` ports and the
//! process-level plumbing around them:
//!
//! - `llm`: OpenAI-compatible chat-completion provider over reqwest
//! - `config`: `folio.toml` loading with environment overrides
//! - `secret`: environment-backed API key lookup
//! - `session`: client-side session id persistence
//! - `client`: HTTP client for a running `/api/chat` endpoint

pub mod client;
pub mod config;
pub mod llm;
pub mod secret;
pub mod session;
