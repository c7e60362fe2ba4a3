//! # Session Token Store
//!
//! The single persisted client value: the opaque session token returned at
//! login.
//!
//! ## Token Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Token Lifecycle                            │
//! │                                                                         │
//! │  App start ──► SessionStore::load() ──► token restored from disk       │
//! │                                          (or None on first run)        │
//! │                                                                         │
//! │  Login OK ──► store(token) ──► memory updated + session.toml written   │
//! │                                                                         │
//! │  Any request ──► token() ──► "Authorization: Bearer <token>" attached  │
//! │                                                                         │
//! │  Logout ──► clear() ──► memory cleared + session.toml removed          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No other client state is persisted: the cart, the search string, and all
//! fetched data live in memory only.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiResult;

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Persistent store for the session token.
///
/// The in-memory copy is behind an `RwLock`: every request reads it, only
/// login/logout write it.
#[derive(Debug)]
pub struct SessionStore {
    /// Where the token is persisted. `None` keeps the store memory-only.
    path: Option<PathBuf>,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Opens the store, restoring a previously saved token if one exists.
    ///
    /// Pass `None` to use the platform default path
    /// (`~/.config/brew-order/session.toml` on Linux).
    pub fn load(path: Option<PathBuf>) -> ApiResult<Self> {
        let path = path.or_else(Self::default_session_path);

        let token = match &path {
            Some(p) if p.exists() => {
                let contents = std::fs::read_to_string(p)?;
                match toml::from_str::<SessionFile>(&contents) {
                    Ok(file) => {
                        debug!(saved_at = %file.saved_at, "Restored session token");
                        Some(file.token)
                    }
                    Err(e) => {
                        warn!("Ignoring unreadable session file: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(SessionStore {
            path,
            token: RwLock::new(token),
        })
    }

    /// Creates a store that never touches the file system. For tests and
    /// ephemeral sessions.
    pub fn in_memory() -> Self {
        SessionStore {
            path: None,
            token: RwLock::new(None),
        }
    }

    /// Returns a copy of the current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Checks if a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Saves a new token to memory and (when a path is configured) to disk.
    pub fn store(&self, token: &str) -> ApiResult<()> {
        *self.token.write().expect("session lock poisoned") = Some(token.to_string());

        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = SessionFile {
                token: token.to_string(),
                saved_at: Utc::now(),
            };
            std::fs::write(path, toml::to_string_pretty(&file)?)?;
            info!(?path, "Session token saved");
        }

        Ok(())
    }

    /// Clears the token from memory and removes the session file.
    pub fn clear(&self) -> ApiResult<()> {
        *self.token.write().expect("session lock poisoned") = None;

        if let Some(path) = &self.path {
            if path.exists() {
                std::fs::remove_file(path)?;
                info!(?path, "Session token removed");
            }
        }

        Ok(())
    }

    /// Returns the default session file path.
    fn default_session_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "brew", "order")
            .map(|dirs| dirs.config_dir().join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_session_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("brew-session-test-{}", Uuid::new_v4()))
            .join("session.toml")
    }

    #[test]
    fn test_in_memory_store() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());

        store.store("tok-123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear().unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_token_round_trips_through_disk() {
        let path = temp_session_path();

        let store = SessionStore::load(Some(path.clone())).unwrap();
        assert!(store.token().is_none());
        store.store("tok-abc").unwrap();

        // A fresh store at the same path restores the token
        let restored = SessionStore::load(Some(path.clone())).unwrap();
        assert_eq!(restored.token().as_deref(), Some("tok-abc"));

        restored.clear().unwrap();
        assert!(!path.exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_session_file_is_ignored() {
        let path = temp_session_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not valid toml [").unwrap();

        let store = SessionStore::load(Some(path.clone())).unwrap();
        assert!(store.token().is_none());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
