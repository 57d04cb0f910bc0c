use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::file::FileSnapshotStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Key-value persistence for serialized snapshots.
///
/// Each key holds one text value. Adapters are swapped per environment
/// (in-memory for tests, a JSON file directory, or `SQLite`).
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing key is
    /// `Ok(None)`, not an error.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    async fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and throwaway sessions.
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate a corrupt snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` for a key the file adapter would
    /// also refuse, and `StorageError::Connection` if the lock is poisoned.
    pub fn insert_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .map(|guard| guard.contains_key(key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert_raw(key, value)
    }

    async fn clear(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Keys are used as file names and table keys, so keep them boring.
///
/// # Errors
///
/// Returns `StorageError::InvalidKey` for empty keys or keys with characters
/// outside `[A-Za-z0-9_.-]`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

/// The selected snapshot backend behind a trait object.
#[derive(Clone)]
pub struct Storage {
    pub snapshots: Arc<dyn SnapshotStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            snapshots: Arc::new(InMemorySnapshotStore::new()),
        }
    }

    /// Store snapshots as JSON files under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn file(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = FileSnapshotStore::open(dir)?;
        Ok(Self {
            snapshots: Arc::new(store),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_round_trip_and_clear() {
        let store = InMemorySnapshotStore::new();
        assert_eq!(store.load("k").await.unwrap(), None);
        store.save("k", "v1").await.unwrap();
        store.save("k", "v2").await.unwrap();
        assert_eq!(store.load("k").await.unwrap().as_deref(), Some("v2"));
        store.clear("k").await.unwrap();
        assert!(!store.contains("k"));
        store.clear("k").await.unwrap();
    }

    #[tokio::test]
    async fn in_memory_rejects_keys_the_file_store_refuses() {
        let store = InMemorySnapshotStore::new();
        assert!(matches!(
            store.save("../escape", "x").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.load("").await, Err(StorageError::InvalidKey(_))));
        assert!(matches!(
            store.clear("a/b").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(!store.contains("../escape"));
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("mathAppUserProgress").is_ok());
        assert!(validate_key("a.b-c_d").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }
}
