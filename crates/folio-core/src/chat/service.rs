//! Chat service answering a single message in mock or live mode.
//!
//! The mode is fixed at construction: live only when a provider is supplied
//! and mock mode is not forced. Each call is independent -- the service holds
//! no per-request state and makes at most one upstream call.

use std::time::Duration;

use folio_types::chat::ChatMode;
use folio_types::config::ChatConfig;
use folio_types::error::ChatError;
use folio_types::llm::{CompletionRequest, LlmError, Message};
use tracing::{Instrument, debug, error, info_span, warn};

use crate::chat::mock::MockResponder;
use crate::llm::box_provider::BoxLlmProvider;

/// Reply used when the upstream answered without any completion text.
pub const EMPTY_COMPLETION_REPLY: &str = "…";

enum Backend {
    Mock,
    Live(BoxLlmProvider),
}

/// Produces a reply string for a user message.
pub struct ChatService {
    backend: Backend,
    responder: MockResponder,
    model: String,
    temperature: f64,
    system_prompt: String,
    mock_delay: Duration,
    max_message_chars: Option<usize>,
}

impl ChatService {
    /// Build the service from configuration and an optional live provider.
    ///
    /// The provider is dropped when mock mode is forced.
    pub fn new(config: &ChatConfig, provider: Option<BoxLlmProvider>) -> Self {
        let mode = ChatMode::select(config.mock, provider.is_some());
        let backend = match (mode, provider) {
            (ChatMode::Live, Some(provider)) => Backend::Live(provider),
            _ => Backend::Mock,
        };

        Self {
            backend,
            responder: MockResponder::new(config.assistant_name.clone()),
            model: config.model.clone(),
            temperature: config.temperature,
            system_prompt: config.system_prompt(),
            mock_delay: Duration::from_millis(config.mock_delay_ms),
            max_message_chars: config.max_message_chars,
        }
    }

    pub fn mode(&self) -> ChatMode {
        match self.backend {
            Backend::Mock => ChatMode::Mock,
            Backend::Live(_) => ChatMode::Live,
        }
    }

    pub fn max_message_chars(&self) -> Option<usize> {
        self.max_message_chars
    }

    /// Reject messages over the configured cap, if one is set.
    pub fn validate(&self, message: &str) -> Result<(), ChatError> {
        match self.max_message_chars {
            Some(max) if message.trim().chars().count() > max => {
                Err(ChatError::InvalidRequest("Message too long".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Answer one message.
    pub async fn reply(&self, message: &str) -> Result<String, ChatError> {
        self.validate(message)?;

        match &self.backend {
            Backend::Mock => {
                tokio::time::sleep(self.mock_delay).await;
                Ok(self.responder.reply(message))
            }
            Backend::Live(provider) => self.live_reply(provider, message).await,
        }
    }

    async fn live_reply(
        &self,
        provider: &BoxLlmProvider,
        message: &str,
    ) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(self.system_prompt.clone()),
                Message::user(message),
            ],
            temperature: Some(self.temperature),
            max_tokens: None,
        };

        let span = info_span!(
            "gen_ai.complete",
            otel.name = %format_args!("chat {}", request.model),
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.temperature = ?request.temperature,
        );

        match provider.complete(&request).instrument(span).await {
            Ok(response) => {
                debug!(
                    provider = provider.name(),
                    finish_reason = ?response.finish_reason,
                    "completion received"
                );
                let reply = response
                    .content
                    .as_deref()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .unwrap_or(EMPTY_COMPLETION_REPLY);
                Ok(reply.to_string())
            }
            Err(LlmError::RateLimited { retry_after_ms }) => {
                warn!(
                    provider = provider.name(),
                    ?retry_after_ms,
                    "upstream rate limited, answering with echo"
                );
                Ok(rate_limited_reply(message))
            }
            Err(LlmError::Upstream { status, payload }) => {
                error!(provider = provider.name(), status, %payload, "upstream error");
                Err(ChatError::Upstream { status, payload })
            }
            Err(LlmError::Timeout) => {
                error!(provider = provider.name(), "upstream request timed out");
                Err(ChatError::UpstreamTimeout)
            }
            Err(e) => {
                error!(provider = provider.name(), error = %e, "completion failed");
                Err(ChatError::Internal(e.to_string()))
            }
        }
    }
}

/// Friendly reply used instead of surfacing an upstream 429.
pub fn rate_limited_reply(message: &str) -> String {
    format!("I’m at my usage limit right now, so here’s a quick echo: “{message}”.")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    use folio_types::llm::{CompletionResponse, MessageRole};

    use super::*;
    use crate::llm::provider::LlmProvider;

    #[derive(Clone)]
    enum Scripted {
        Content(Option<String>),
        RateLimited,
        Upstream(u16, serde_json::Value),
        Timeout,
        Transport,
    }

    struct ScriptedProvider {
        script: Scripted,
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl ScriptedProvider {
        fn boxed(script: Scripted) -> (BoxLlmProvider, Arc<Mutex<Vec<CompletionRequest>>>) {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let provider = ScriptedProvider {
                script,
                seen: Arc::clone(&seen),
            };
            (BoxLlmProvider::new(provider), seen)
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            match self.script.clone() {
                Scripted::Content(content) => Ok(CompletionResponse {
                    content,
                    model: request.model.clone(),
                    ..CompletionResponse::default()
                }),
                Scripted::RateLimited => Err(LlmError::RateLimited {
                    retry_after_ms: Some(1000),
                }),
                Scripted::Upstream(status, payload) => Err(LlmError::Upstream { status, payload }),
                Scripted::Timeout => Err(LlmError::Timeout),
                Scripted::Transport => Err(LlmError::Transport("connection refused".into())),
            }
        }
    }

    fn mock_config(delay_ms: u64) -> ChatConfig {
        ChatConfig {
            mock_delay_ms: delay_ms,
            ..ChatConfig::default()
        }
    }

    fn live(script: Scripted) -> (ChatService, Arc<Mutex<Vec<CompletionRequest>>>) {
        let (provider, seen) = ScriptedProvider::boxed(script);
        (ChatService::new(&ChatConfig::default(), Some(provider)), seen)
    }

    #[test]
    fn mode_is_mock_without_provider() {
        let service = ChatService::new(&ChatConfig::default(), None);
        assert_eq!(service.mode(), ChatMode::Mock);
    }

    #[test]
    fn forced_mock_ignores_provider() {
        let (provider, _) = ScriptedProvider::boxed(Scripted::Content(Some("x".into())));
        let config = ChatConfig {
            mock: true,
            ..ChatConfig::default()
        };
        let service = ChatService::new(&config, Some(provider));
        assert_eq!(service.mode(), ChatMode::Mock);
    }

    #[tokio::test]
    async fn mock_reply_waits_for_delay() {
        let service = ChatService::new(&mock_config(60), None);
        let started = Instant::now();
        let reply = service.reply("hello").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(60));
        assert_eq!(reply, "Hey there! 👋 What can I help you with?");
    }

    #[tokio::test]
    async fn mock_replies_are_idempotent() {
        let service = ChatService::new(&mock_config(0), None);
        let first = service.reply("Tell me a joke please").await.unwrap();
        let second = service.reply("Tell me a joke please").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn live_request_carries_system_prompt_and_temperature() {
        let (service, seen) = live(Scripted::Content(Some("  Hi!  ".into())));
        let reply = service.reply("hello there").await.unwrap();
        assert_eq!(reply, "Hi!");

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.messages[0].content.contains("friendly website assistant"));
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].content, "hello there");
    }

    #[tokio::test]
    async fn live_missing_or_blank_content_uses_placeholder() {
        let (service, _) = live(Scripted::Content(None));
        assert_eq!(service.reply("q").await.unwrap(), EMPTY_COMPLETION_REPLY);

        let (service, _) = live(Scripted::Content(Some("   ".into())));
        assert_eq!(service.reply("q").await.unwrap(), EMPTY_COMPLETION_REPLY);
    }

    #[tokio::test]
    async fn live_rate_limit_degrades_to_echo() {
        let (service, _) = live(Scripted::RateLimited);
        let reply = service.reply("what do you build?").await.unwrap();
        assert!(reply.contains("“what do you build?”"));
        assert!(reply.starts_with("I’m at my usage limit"));
    }

    #[tokio::test]
    async fn live_upstream_error_passes_through() {
        let payload = serde_json::json!({"message": "Incorrect API key", "type": "invalid_request_error"});
        let (service, _) = live(Scripted::Upstream(401, payload.clone()));
        match service.reply("hi").await {
            Err(ChatError::Upstream { status, payload: p }) => {
                assert_eq!(status, 401);
                assert_eq!(p, payload);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn live_timeout_and_transport_errors() {
        let (service, _) = live(Scripted::Timeout);
        assert!(matches!(service.reply("hi").await, Err(ChatError::UpstreamTimeout)));

        let (service, _) = live(Scripted::Transport);
        assert!(matches!(service.reply("hi").await, Err(ChatError::Internal(_))));
    }

    #[tokio::test]
    async fn overlong_message_is_rejected_before_upstream() {
        let (provider, seen) = ScriptedProvider::boxed(Scripted::Content(Some("x".into())));
        let config = ChatConfig {
            max_message_chars: Some(5),
            ..ChatConfig::default()
        };
        let service = ChatService::new(&config, Some(provider));

        let result = service.reply("far too long").await;
        assert!(matches!(result, Err(ChatError::InvalidRequest(_))));
        assert!(seen.lock().unwrap().is_empty());

        // Surrounding whitespace does not count.
        assert!(service.reply("  abc  ").await.is_ok());
    }

    #[tokio::test]
    async fn long_message_is_answered_without_a_cap() {
        let service = ChatService::new(&mock_config(0), None);
        assert_eq!(service.max_message_chars(), None);

        let message = "z".repeat(1001);
        let reply = service.reply(&message).await.unwrap();
        assert!(reply.contains(&message));
    }
}
