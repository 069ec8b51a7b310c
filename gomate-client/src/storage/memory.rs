//! In-memory key-value store for testing.
//!
//! Allows inspecting stored values and forcing failures for verification.

use super::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory key-value store.
///
/// Clones share the same map, so a test can keep a handle while the
/// [`App`](crate::App) owns another. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    values: HashMap<String, String>,
    fail_next_get: Option<String>,
    fail_next_set: Option<String>,
    fail_next_remove: Option<String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read a value without going through the async trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Seed a value without counting it as a write.
    pub fn insert(&self, key: &str, value: &str) {
        self.lock().values.insert(key.to_string(), value.to_string());
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock().values.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().values.is_empty()
    }

    /// Number of successful `set()` calls so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Cause the next `get()` to fail with the given error.
    pub fn fail_next_get(&self, error: &str) {
        self.lock().fail_next_get = Some(error.to_string());
    }

    /// Cause the next `set()` to fail with the given error.
    pub fn fail_next_set(&self, error: &str) {
        self.lock().fail_next_set = Some(error.to_string());
    }

    /// Cause the next `remove()` to fail with the given error.
    pub fn fail_next_remove(&self, error: &str) {
        self.lock().fail_next_remove = Some(error.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut inner = self.lock();

        if let Some(error) = inner.fail_next_get.take() {
            return Err(StorageError::Unavailable(error));
        }

        Ok(inner.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();

        if let Some(error) = inner.fail_next_set.take() {
            return Err(StorageError::Unavailable(error));
        }

        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();

        if let Some(error) = inner.fail_next_remove.take() {
            return Err(StorageError::Unavailable(error));
        }

        inner.values.remove(key);
        Ok(())
    }
}
