//! Chat reply logic for folio.
//!
//! `ChatService` picks between the rule-based `MockResponder` and a live
//! `BoxLlmProvider`, and translates provider errors into `ChatError`.

pub mod mock;
pub mod service;
