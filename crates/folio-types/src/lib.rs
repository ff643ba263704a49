//! Shared domain types for folio.
//!
//! This crate contains the types used across the workspace: chat messages
//! and request/reply bodies, the chat mode, configuration, LLM request and
//! response shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
