//! JSON-serialized current-user record under a fixed key.
//!
//! Reads fail open: anything that is missing, unreadable, or not a complete
//! `User` comes back as `None` so startup lands in the logged-out state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::Arc;

use super::backend::{BrowserStorage, SessionBackend};
use super::user::User;

/// Error returned by [`SessionStore`] writes and by backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage medium exists in this environment.
    #[error("session storage is unavailable")]
    Unavailable,
    /// The medium rejected the operation (quota, security policy, ...).
    #[error("session storage operation failed: {0}")]
    Backend(String),
    /// The user record could not be encoded.
    #[error("failed to encode session user: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted holder of at most one serialized `User`.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    key: String,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static, key: impl Into<String>) -> Self {
        Self { backend: Arc::new(backend), key: key.into() }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(BrowserStorage, key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored user, treating every failure as "no user".
    pub fn get(&self) -> Option<User> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("session: read of '{}' failed, treating as signed out: {e}", self.key);
                return None;
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session: discarding unparsable value under '{}': {e}", self.key);
                None
            }
        }
    }

    /// Replace the stored user.
    pub fn set(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.backend.write(&self.key, &raw)
    }

    /// Remove the stored user. Succeeds when nothing is stored.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}
