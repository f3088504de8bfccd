//! File-backed key-value storage.
//!
//! All keys live in a single JSON object file, by default
//! `~/.mindnest/storage.json`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::STORAGE_FILE;
use crate::traits::{KeyValueStore, StorageError};

/// The storage directory name under the home directory.
const STORAGE_DIR: &str = ".mindnest";

/// Key-value storage persisted as one JSON object.
///
/// Every write re-reads the file, applies the change and writes it back
/// while holding an internal lock, so concurrent writers in one process
/// never lose each other's keys.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Storage at the default location in the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_path(home.join(STORAGE_DIR).join(STORAGE_FILE)))
    }

    /// Storage backed by an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Storage file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(STORAGE_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(StorageError::from)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let file =
            File::create(&self.path).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer
            .flush()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Other("storage lock poisoned".to_string()))?;
        let mut entries = self.read_all()?;
        if apply(&mut entries) {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Other("storage lock poisoned".to_string()))?;
        Ok(self.read_all()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| entries.remove(key).is_some())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|entries| {
            let mut changed = false;
            for key in keys {
                changed |= entries.remove(*key).is_some();
            }
            changed
        })
    }
}
