//! Global configuration loader for folio.
//!
//! Reads `folio.toml` (or the path given with `--config`) and deserializes
//! it into [`GlobalConfig`], then layers environment variables on top. Falls
//! back to defaults when the file is missing or malformed, so the server
//! always starts.
//!
//! Environment overrides:
//!
//! | Variable          | Field                 |
//! |-------------------|-----------------------|
//! | `MOCK_CHAT`       | `chat.mock`           |
//! | `OPENAI_MODEL`    | `chat.model`          |
//! | `OPENAI_BASE_URL` | `chat.base_url`       |
//! | `FOLIO_HOST`      | `server.host`         |
//! | `PORT`            | `server.port`         |
//! | `FOLIO_WEB_DIR`   | `server.web_dir`      |

use std::path::{Path, PathBuf};

use folio_types::config::GlobalConfig;
use folio_types::error::ConfigError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Dotenv files loaded at startup, in priority order.
const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` then `.env` into the process environment.
///
/// Variables already set are never overwritten, so the shell wins over
/// `.env.local`, which wins over `.env`. Must run before any threads spawn,
/// which also means before tracing is set up; the caller logs the result.
pub fn load_dotenv() -> Vec<Result<PathBuf, String>> {
    DOTENV_FILES
        .iter()
        .filter_map(|file| match dotenv::from_filename(file) {
            Ok(path) => Some(Ok(path)),
            Err(err) if err.not_found() => None,
            Err(err) => Some(Err(format!("{file}: {err}"))),
        })
        .collect()
}

/// Read and parse a config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config_file(path: &Path) -> Result<Option<GlobalConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<GlobalConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_global_config(path: &Path) -> GlobalConfig {
    match read_config_file(path).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            GlobalConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            GlobalConfig::default()
        }
    }
}

/// Apply the process environment on top of a loaded config.
pub fn apply_env_overrides(config: &mut GlobalConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary variable source.
pub fn apply_overrides_from<F>(config: &mut GlobalConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("MOCK_CHAT") {
        config.chat.mock = parse_flag(&value);
    }
    if let Some(model) = lookup("OPENAI_MODEL").filter(|v| !v.trim().is_empty()) {
        config.chat.model = model;
    }
    if let Some(base_url) = lookup("OPENAI_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.chat.base_url = base_url;
    }
    if let Some(host) = lookup("FOLIO_HOST").filter(|v| !v.trim().is_empty()) {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(err) => tracing::warn!("Ignoring PORT={port:?}: {err}"),
        }
    }
    if let Some(dir) = lookup("FOLIO_WEB_DIR").filter(|v| !v.trim().is_empty()) {
        config.server.web_dir = Some(PathBuf::from(dir));
    }
}

/// Interpret a boolean-like environment value.
///
/// `1`, `true`, `yes`, and `on` (any case) are true; everything else is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
