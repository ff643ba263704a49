//! LlmProvider trait definition.
//!
//! This is the core abstraction that completion backends implement.
//! Uses RPITIT for `complete`; `BoxLlmProvider` adds dynamic dispatch.

use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
///
/// Implementations live in folio-infra (e.g., `OpenAiCompatibleProvider`).
/// A single call makes at most one upstream request; retries are not the
/// provider's job.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
