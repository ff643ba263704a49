//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `folio-core`, and the factory ([`create_provider`]) that
//! turns chat settings plus an optional API key into the live provider.
//!
//! [`LlmProvider`]: folio_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use folio_core::llm::box_provider::BoxLlmProvider;
use folio_types::config::ChatConfig;
use folio_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;

/// Build the live provider, if there is a key to use.
///
/// Returns `Ok(None)` without an API key; the chat service then runs in mock
/// mode.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_provider(
    chat: &ChatConfig,
    api_key: Option<SecretString>,
) -> Result<Option<BoxLlmProvider>, LlmError> {
    let Some(api_key) = api_key else {
        return Ok(None);
    };

    let config = openai_compat::config::from_chat_config(chat, api_key);
    let provider = OpenAiCompatibleProvider::new(config)?;
    Ok(Some(BoxLlmProvider::new(provider)))
}
