//! Client-side session store: auth token, its expiry, and the cached user.
//!
//! Persistence goes through the [`SessionStorage`] port so the store can run
//! on top of browser local storage, a file, or the bundled in-memory backend.
//! Storage faults never escape to callers: they are logged and degrade to
//! "no session".

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeDelta, Utc};
use log::warn;
use thiserror::Error;

use crate::domain::auth::User;

pub const TOKEN_KEY: &str = "auth_token";
pub const TOKEN_EXPIRY_KEY: &str = "auth_token_expiry";
pub const USER_KEY: &str = "user_data";

/// Errors raised by a [`SessionStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Key-value persistence port for session state.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage backend.
///
/// Clones share the same underlying map, so a handle kept by the caller
/// observes everything the session store writes.
#[derive(Clone, Debug, Default)]
pub struct InMemorySessionStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Session state machine: unauthenticated -> (login) -> authenticated ->
/// (logout | expiry | login failure) -> unauthenticated.
///
/// Expiry is enforced lazily inside [`SessionStore::token`]; there is no
/// background timer. Concurrent expiry detections may both clear, which is
/// idempotent.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the stored token unless absent or expired.
    ///
    /// An expiry timestamp in the past clears the whole session (token,
    /// expiry, user) before returning `None`. A token stored without an
    /// expiry never expires. An unparseable expiry is ignored, matching the
    /// behavior of the storage format this store replaces.
    pub fn token(&self) -> Option<String> {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read auth token: {e}");
                return None;
            }
        };

        match self.storage.get(TOKEN_EXPIRY_KEY) {
            Ok(Some(raw)) => match raw.parse::<i64>() {
                Ok(expires_at) if Utc::now().timestamp_millis() > expires_at => {
                    self.clear();
                    return None;
                }
                Ok(_) => {}
                Err(_) => warn!("ignoring unparseable token expiry: {raw:?}"),
            },
            Ok(None) => {}
            Err(e) => {
                warn!("failed to read token expiry: {e}");
                return None;
            }
        }

        Some(token)
    }

    /// Stores the token, computing an absolute expiry when a TTL is given.
    ///
    /// Without a TTL any leftover expiry key is removed, so the new token
    /// cannot inherit the expiry of the one it replaces.
    pub fn set_token(&self, token: &str, ttl: Option<TimeDelta>) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            warn!("failed to store auth token: {e}");
            return;
        }

        match ttl {
            Some(ttl) => {
                let expires_at = Utc::now().timestamp_millis() + ttl.num_milliseconds();
                if let Err(e) = self.storage.set(TOKEN_EXPIRY_KEY, &expires_at.to_string()) {
                    warn!("failed to store token expiry: {e}");
                }
            }
            None => {
                if let Err(e) = self.storage.remove(TOKEN_EXPIRY_KEY) {
                    warn!("failed to remove stale token expiry: {e}");
                }
            }
        }
    }

    /// Returns the cached user identity, independent of token expiry.
    pub fn user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read user record: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("failed to parse stored user record: {e}");
                None
            }
        }
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(USER_KEY, &raw) {
                    warn!("failed to store user record: {e}");
                }
            }
            Err(e) => warn!("failed to serialize user record: {e}"),
        }
    }

    /// Removes token, expiry, and user.
    ///
    /// The three deletions are independent: a failure on one is logged and
    /// the remaining keys are still attempted.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, TOKEN_EXPIRY_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("failed to remove session key {key}: {e}");
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
