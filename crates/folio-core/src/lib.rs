//! Business logic and provider trait definitions for folio.
//!
//! This crate defines the "ports" (the `LlmProvider` trait) that the
//! infrastructure layer implements, plus the chat service that decides
//! between mock and live replies. It depends only on `folio-types` --
//! never on `folio-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
