//! OpenAiCompatibleProvider -- [`LlmProvider`] for the OpenAI chat completions API.
//!
//! Sends one non-streaming `POST {base_url}/chat/completions` per call. The
//! HTTP client carries a request timeout, so a hung upstream surfaces as
//! [`LlmError::Timeout`] instead of stalling the caller.
//!
//! Status mapping:
//! - 2xx: parsed into a [`CompletionResponse`]
//! - 429: [`LlmError::RateLimited`] (with `retry-after` when present)
//! - anything else: [`LlmError::Upstream`] carrying the upstream error payload
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the `Authorization` header.

pub mod config;
pub mod types;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use folio_core::llm::provider::LlmProvider;
use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use self::config::OpenAiCompatConfig;
use self::types::{OpenAiChatRequest, OpenAiChatResponse, OpenAiMessage};

/// Payload used when a failed upstream response has no usable body.
const FALLBACK_ERROR_PAYLOAD: &str = "LLM request failed";

/// OpenAI-compatible LLM provider.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    provider_name: String,
    base_url: String,
    api_key: SecretString,
}

// No Debug derive: keeps the client and key out of formatted output.

impl OpenAiCompatibleProvider {
    /// Create a provider from an explicit configuration.
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            provider_name: config.provider_name,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request(&self, request: &CompletionRequest) -> OpenAiChatRequest {
        OpenAiChatRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| OpenAiMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.build_request(request);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(LlmError::RateLimited {
                retry_after_ms: retry_after_ms(response.headers()),
            });
        }

        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                payload: error_payload(&text),
            });
        }

        let parsed: OpenAiChatResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let first = parsed.choices.into_iter().next();
        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let content = first.and_then(|c| c.message).and_then(|m| m.content);

        Ok(CompletionResponse {
            id: parsed.id,
            content,
            model: parsed.model.unwrap_or_else(|| request.model.clone()),
            finish_reason,
            usage: parsed.usage.map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            }),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Transport(err.to_string())
    }
}

/// `retry-after` in whole seconds, converted to milliseconds.
fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Pick the error payload to relay from a failed upstream body.
///
/// Takes the body's `error` field when it is truthy, else the whole JSON
/// body when that is truthy, else the fallback string. Objects and arrays
/// are always truthy; `null`, `false`, `0` and `""` never are. A body that
/// is not JSON is relayed as its trimmed text.
pub(crate) fn error_payload(body: &str) -> Value {
    let fallback = || Value::String(FALLBACK_ERROR_PAYLOAD.to_string());

    match serde_json::from_str::<Value>(body) {
        Ok(data) => match data.get("error") {
            Some(error) if is_truthy(error) => error.clone(),
            _ if is_truthy(&data) => data,
            _ => fallback(),
        },
        Err(_) if !body.trim().is_empty() => Value::String(body.trim().to_string()),
        Err(_) => fallback(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
