//! HTTP layer for folio.
//!
//! Axum router exposing `/api/chat` and `/health`, JSON `{error}` bodies for
//! every failure, CORS, and optional static site serving.

pub mod error;
pub mod handlers;
pub mod router;
