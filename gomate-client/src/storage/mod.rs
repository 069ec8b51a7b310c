//! Persisted key-value storage for GoMate.
//!
//! This module provides the string-to-string store that keeps the session,
//! favorites and theme across restarts.
//!
//! # Design
//!
//! The contract is deliberately tiny:
//! - `get()` returns the stored string, or `None` when the key is absent
//! - `set()` replaces the value for a key
//! - `remove()` deletes a key (absent keys are not an error)
//!
//! Values are opaque to the store; encoding lives with the callers.
//!
//! # Keys
//!
//! | Key | Value |
//! |---|---|
//! | [`AUTH_TOKEN_KEY`] | raw token string |
//! | [`USER_KEY`] | JSON user record |
//! | [`FAVORITES_KEY`] | JSON array of destinations |
//! | [`THEME_KEY`] | `"dark"` or `"light"` |

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Key holding the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Key holding the serialized user.
pub const USER_KEY: &str = "user";

/// Key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Key holding the theme token.
pub const THEME_KEY: &str = "theme";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Store contents could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Store is unavailable (injected by tests, or a backend outage).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable mapping from string keys to string values.
///
/// Implementations must survive process restarts to be useful in
/// production; [`MemoryStore`] exists for tests and demos.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
