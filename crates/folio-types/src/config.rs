//! Global configuration types for folio.
//!
//! `GlobalConfig` represents the top-level `folio.toml` that controls the
//! HTTP listener and the chat endpoint's behavior. Every field has a default,
//! so an empty or missing file yields a working mock-mode server.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of a pre-built static site to serve alongside the API.
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: None,
        }
    }
}

/// Chat endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Force mock mode even when an API key is configured.
    #[serde(default)]
    pub mock: bool,

    /// Site owner's name, used in the system prompt and mock identity reply.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Overrides the generated system prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Artificial latency before a mock reply.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,

    /// Upper bound on a single upstream completion call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Server-side cap on message length in characters. Unset means any
    /// length is answered.
    #[serde(default)]
    pub max_message_chars: Option<usize>,

    /// Length the terminal chat client refuses to send.
    #[serde(default = "default_widget_max_chars")]
    pub widget_max_chars: usize,
}

fn default_assistant_name() -> String {
    "Jek".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_mock_delay_ms() -> u64 {
    350
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_widget_max_chars() -> usize {
    1000
}

impl ChatConfig {
    /// The system prompt sent ahead of every live-mode message.
    pub fn system_prompt(&self) -> String {
        match &self.system_prompt {
            Some(prompt) => prompt.clone(),
            None => format!(
                "You are {}'s friendly website assistant. Keep replies short and helpful.",
                self.assistant_name
            ),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            mock: false,
            assistant_name: default_assistant_name(),
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: None,
            base_url: default_base_url(),
            mock_delay_ms: default_mock_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            max_message_chars: None,
            widget_max_chars: default_widget_max_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert!(config.server.web_dir.is_none());
        assert!(!config.chat.mock);
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert_eq!(config.chat.mock_delay_ms, 350);
        assert_eq!(config.chat.max_message_chars, None);
        assert_eq!(config.chat.widget_max_chars, 1000);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3001);
        assert!((config.chat.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.chat.request_timeout_secs, 30);
    }

    #[test]
    fn test_global_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 8080
web_dir = "dist"

[chat]
mock = true
assistant_name = "Ada"
mock_delay_ms = 10
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.web_dir, Some(PathBuf::from("dist")));
        assert!(config.chat.mock);
        assert_eq!(config.chat.assistant_name, "Ada");
        assert_eq!(config.chat.mock_delay_ms, 10);
        assert_eq!(config.chat.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_system_prompt_uses_assistant_name() {
        let config = ChatConfig::default();
        assert_eq!(
            config.system_prompt(),
            "You are Jek's friendly website assistant. Keep replies short and helpful."
        );
    }

    #[test]
    fn test_system_prompt_override() {
        let config = ChatConfig {
            system_prompt: Some("Be terse.".to_string()),
            ..ChatConfig::default()
        };
        assert_eq!(config.system_prompt(), "Be terse.");
    }
}
