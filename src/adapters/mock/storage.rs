//! In-memory key-value storage for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// [`KeyValueStore`] backed by a map. Clones share the same map, so a test
/// can keep a handle while the code under test owns another.
///
/// ```ignore
/// let store = InMemoryStorage::with_entries(&[("user_id", "u1")]);
/// store.set_write_should_fail(true);
/// assert!(store.set_item("theme_mode", "dark").await.is_err());
/// assert_eq!(store.snapshot("user_id").as_deref(), Some("u1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<Mutex<Entries>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let storage = Self::new();
        storage.lock().values.extend(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every read fail until switched back.
    pub fn set_read_should_fail(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make every write and removal fail until switched back.
    pub fn set_write_should_fail(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Current value, ignoring injected failures.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.lock();
        if entries.fail_reads {
            return Err(StorageError::ReadFailed(format!("injected failure reading {}", key)));
        }
        Ok(entries.values.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        if entries.fail_writes {
            return Err(StorageError::WriteFailed(format!("injected failure writing {}", key)));
        }
        entries.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        if entries.fail_writes {
            return Err(StorageError::RemoveFailed(format!("injected failure removing {}", key)));
        }
        entries.values.remove(key);
        Ok(())
    }
}
