//! Application state shared by the CLI and the HTTP server.
//!
//! Built once at startup: configuration is loaded and overridden from the
//! environment, the API key is resolved, and the chat service is pinned to
//! mock or live mode. Nothing in here changes afterwards.

use std::path::Path;
use std::sync::Arc;

use folio_core::chat::service::ChatService;
use folio_infra::config::{apply_env_overrides, load_global_config};
use folio_infra::llm::create_provider;
use folio_infra::secret::OPENAI_API_KEY;
use folio_infra::secret::env::EnvSecretProvider;
use folio_types::config::GlobalConfig;

/// Shared application state holding the chat service and its configuration.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub config: Arc<GlobalConfig>,
}

impl AppState {
    /// Load configuration from `config_path` and wire the chat service.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let mut config = load_global_config(config_path).await;
        apply_env_overrides(&mut config);

        let api_key = EnvSecretProvider::new().get(OPENAI_API_KEY);
        let provider = create_provider(&config.chat, api_key)?;
        let chat_service = ChatService::new(&config.chat, provider);

        tracing::info!(
            mode = %chat_service.mode(),
            model = %config.chat.model,
            "chat service ready"
        );

        Ok(Self::from_parts(config, chat_service))
    }

    pub fn from_parts(config: GlobalConfig, chat_service: ChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }
}
