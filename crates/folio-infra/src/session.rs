//! Client-side chat session identifier.
//!
//! The terminal chat client tags every request with an opaque session id
//! that stays stable for a given profile. The id lives in
//! `{data_dir}/session_id`; the server never validates or stores it.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// File name of the cached session id inside the data directory.
pub const SESSION_FILE: &str = "session_id";

/// Resolve the client data directory from environment or platform defaults.
///
/// Priority:
/// 1. `FOLIO_DATA_DIR` environment variable
/// 2. `~/.folio`
/// 3. `.folio` in the working directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FOLIO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".folio");
    }

    PathBuf::from(".folio")
}

/// Reads and lazily creates the cached session id.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stored session id, creating and persisting one if needed.
    ///
    /// Persisting is best-effort: when the file cannot be written the fresh
    /// id is still returned, it just won't survive the process.
    pub async fn load_or_create(&self) -> String {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if !content.trim().is_empty() => return content.trim().to_string(),
            Ok(_) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!("Failed to read {}: {err}", self.path.display());
            }
        }

        let id = Uuid::now_v7().to_string();
        if let Err(err) = self.persist(&id).await {
            tracing::warn!(
                "Could not save session id to {}: {err}",
                self.path.display()
            );
        }
        id
    }

    async fn persist(&self, id: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, id).await
    }
}
