use std::path::PathBuf;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Session file name in cache directory
const SESSION_FILE: &str = "session.json";

/// Read-only view of the current session.
///
/// The navigation guard and the API client consult this on every relevant
/// event; neither ever writes through it. Writes happen in the login/logout
/// flow, against the concrete store it owns.
pub trait SessionStore: Send + Sync {
    /// The current session token, or `None` when logged out.
    ///
    /// An absent token is a normal state, not an error.
    fn token(&self) -> Option<String>;
}

/// On-disk session record. The token is the only session attribute the
/// client side models.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    token: String,
}

/// Durable session store backed by a JSON file in the cache directory.
///
/// The file survives process restarts within the same machine account. It is
/// neither encrypted nor synced across devices.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            path: cache_dir.join(SESSION_FILE),
        }
    }

    /// Persist a new session token. Called by the login flow only.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = SessionData {
            token: token.to_string(),
        };
        let contents = serde_json::to_string_pretty(&data)?;
        std::fs::write(&self.path, contents).context("Failed to write session file")?;
        debug!(path = %self.path.display(), "Saved session");
        Ok(())
    }

    /// Remove the stored session token. Called by the logout flow only.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove session file")?;
            debug!(path = %self.path.display(), "Cleared session");
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        // Fresh read on every call: a login or logout elsewhere in the app
        // is visible to the next caller.
        if !self.path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session file, treating as logged out");
                return None;
            }
        };
        match serde_json::from_str::<SessionData>(&contents) {
            Ok(data) => Some(data.token),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed session file, treating as logged out");
                None
            }
        }
    }
}

/// In-process session store.
///
/// Substitutable for `FileSessionStore` in tests, and usable by embedders
/// that manage the token lifetime themselves.
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: RwLock::new(token.map(str::to_string)),
        }
    }

    /// Replace the stored token. Called by the login/logout flow only.
    pub fn set(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileSessionStore {
        let dir = std::env::temp_dir()
            .join("confab-core-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        FileSessionStore::new(dir)
    }

    #[test]
    fn test_file_store_absent_by_default() {
        let store = temp_store("absent");
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_file_store_save_then_read() {
        let store = temp_store("save-read");
        store.save("abc123").unwrap();
        assert_eq!(store.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_file_store_survives_new_handle() {
        // A second handle over the same directory sees the saved token,
        // the durable-storage contract the guard and client depend on.
        let store = temp_store("durable");
        store.save("abc123").unwrap();

        let reopened = FileSessionStore::new(store.path.parent().unwrap().to_path_buf());
        assert_eq!(reopened.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_file_store_clear() {
        let store = temp_store("clear");
        store.save("abc123").unwrap();
        store.clear().unwrap();
        assert_eq!(store.token(), None);

        // Clearing an already-absent session is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_write_visible_to_next_read() {
        let store = temp_store("reread");
        assert_eq!(store.token(), None);
        store.save("first").unwrap();
        assert_eq!(store.token(), Some("first".to_string()));
        store.save("second").unwrap();
        assert_eq!(store.token(), Some("second".to_string()));
    }

    #[test]
    fn test_file_store_malformed_is_logged_out() {
        let store = temp_store("malformed");
        std::fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        std::fs::write(&store.path, "not json").unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new(None);
        assert_eq!(store.token(), None);

        store.set(Some("abc123".to_string()));
        assert_eq!(store.token(), Some("abc123".to_string()));

        store.set(None);
        assert_eq!(store.token(), None);
    }
}
