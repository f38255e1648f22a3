//! MemoryStorage - HashMap-backed substrate for tests, demos and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{StorageBackend, StorageError};

/// In-process key-value medium.
///
/// Clone-friendly via Arc: every clone sees the same data, the way every tab
/// of one origin sees the same local storage. An optional quota caps the total
/// size (key bytes + value bytes) of everything stored.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty medium that rejects writes past `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            quota: Some(quota),
        }
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Total bytes currently used, counted the same way as the quota.
    pub fn used_bytes(&self) -> Result<usize, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(used_bytes(&items))
    }
}

fn used_bytes(items: &HashMap<String, String>) -> usize {
    items.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;

        if let Some(quota) = self.quota {
            let replaced = items.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let needed = used_bytes(&items) - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::LockPoisoned("remove"))?;
        items.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::LockPoisoned("clear"))?;
        items.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::LockPoisoned("keys"))?;
        Ok(items.keys().cloned().collect())
    }
}
