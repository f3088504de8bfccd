//! Key-value storage trait abstraction.
//!
//! Mirrors the string-keyed local storage the app persists its session,
//! preferences and caches into.

use async_trait::async_trait;
use thiserror::Error;

/// Why a storage operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("could not read storage: {0}")]
    ReadFailed(String),

    #[error("could not write storage: {0}")]
    WriteFailed(String),

    #[error("could not remove key: {0}")]
    RemoveFailed(String),

    #[error("storage I/O: {0}")]
    Io(String),

    /// A stored value is not the JSON it should be.
    #[error("stored value is not valid JSON: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// String-keyed persistent storage, modelled on the device storage the app
/// keeps its session, preferences and caches in.
///
/// # Example
///
/// ```ignore
/// use mindnest::traits::KeyValueStore;
///
/// async fn remember_name<S: KeyValueStore>(store: &S, name: &str) -> Result<(), StorageError> {
///     store.set_item("user_name", name).await
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    /// - `Err(error)` if the storage could not be read
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Remove several keys.
    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove_item(key).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStorage;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StorageError::WriteFailed("disk full".to_string()).to_string(),
            "could not write storage: disk full"
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(StorageError::from(json_err), StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_default_multi_remove() {
        let store = InMemoryStorage::with_entries(&[("a", "1"), ("b", "2"), ("c", "3")]);
        store.multi_remove(&["a", "c", "missing"]).await.unwrap();
        assert!(!store.contains("a"));
        assert!(store.contains("b"));
        assert!(!store.contains("c"));
    }
}
