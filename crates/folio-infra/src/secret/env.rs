//! Environment variable secret provider.
//!
//! A read-only provider that checks environment variables. Values are
//! wrapped in [`SecretString`] as soon as they are read. An empty or
//! whitespace-only value counts as unset, so `OPENAI_API_KEY=` in a `.env`
//! file keeps the endpoint in mock mode.

use secrecy::SecretString;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    /// Create a new environment variable secret provider.
    pub fn new() -> Self {
        Self
    }

    /// Look up `key` in the process environment.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        self.get_with(key, |k| std::env::var(k).ok())
    }

    /// Look up `key` through an arbitrary variable source.
    pub fn get_with<F>(&self, key: &str, lookup: F) -> Option<SecretString>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Non-unicode values come back as None from `env::var(..).ok()` and
        // are treated as not found.
        let value = lookup(key)?;
        if value.trim().is_empty() {
            tracing::debug!(key, "secret is set but empty; treating as absent");
            return None;
        }
        Some(SecretString::from(value))
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
