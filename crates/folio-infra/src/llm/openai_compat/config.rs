//! Configuration for OpenAI-compatible providers.

use std::time::Duration;

use secrecy::SecretString;

use folio_types::config::ChatConfig;

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Upper bound on one request, connect through body.
    pub timeout: Duration,
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`, 30 second timeout.
pub fn openai_defaults(api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
        timeout: Duration::from_secs(30),
    }
}

/// Provider configuration derived from the chat settings.
pub fn from_chat_config(chat: &ChatConfig, api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        base_url: chat.base_url.clone(),
        timeout: Duration::from_secs(chat.request_timeout_secs),
        ..openai_defaults(api_key)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_openai_defaults() {
        let config = openai_defaults(SecretString::from("sk-test"));
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api_key.expose_secret(), "sk-test");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_chat_config_overrides_url_and_timeout() {
        let chat = ChatConfig {
            base_url: "http://localhost:9999/v1".to_string(),
            request_timeout_secs: 5,
            ..ChatConfig::default()
        };
        let config = from_chat_config(&chat, SecretString::from("sk-test"));
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
