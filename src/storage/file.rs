//! FileStorage - substrate persisted as a single file on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{StorageBackend, StorageError};

/// Key-value medium persisted to one file.
///
/// The whole map is loaded on [`open`](FileStorage::open) and the whole map is
/// rewritten (temp file + rename) on every mutation, so the file is never left
/// half-written. Memory is only updated after the file write succeeds.
///
/// Clones share the same map. Open a given path once per process; two
/// independently opened instances overwrite each other's writes.
#[derive(Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let bytes = fs::read(&path)?;
            if bytes.is_empty() {
                HashMap::new()
            } else {
                bitcode::deserialize(&bytes)?
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), keys = items.len(), "opened file storage");

        Ok(Self {
            path,
            items: Arc::new(RwLock::new(items)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        let bytes = bitcode::serialize(items)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn mutate<F>(&self, operation: &'static str, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::LockPoisoned(operation))?;

        let mut next = items.clone();
        apply(&mut next);
        self.persist(&next)?;
        *items = next;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate("write", |items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        {
            let items = self
                .items
                .read()
                .map_err(|_| StorageError::LockPoisoned("remove"))?;
            if !items.contains_key(key) {
                return Ok(());
            }
        }
        self.mutate("remove", |items| {
            items.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.mutate("clear", |items| items.clear())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::LockPoisoned("keys"))?;
        Ok(items.keys().cloned().collect())
    }
}
