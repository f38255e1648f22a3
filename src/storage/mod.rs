//! Storage - the flat key-value substrate the collection store is built on.
//!
//! A [`StorageBackend`] stores raw strings under string keys (think of a
//! browser's per-origin local storage). [`Storage`] wraps a backend with JSON
//! parse/serialize at the boundary and contains every failure: unreadable or
//! missing entries come back as `None`, failed writes are logged and dropped.
//!
//! ## Example
//!
//! ```ignore
//! use pos_store::{MemoryStorage, Storage};
//!
//! let storage = Storage::new(MemoryStorage::new());
//! storage.set("greeting", &"hello");
//! let value: Option<String> = storage.get("greeting");
//! ```

mod error;
mod file;
mod memory;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Raw string key-value medium.
///
/// All methods take `&self`; implementations guard their state internally and
/// hold any lock only for the duration of one call.
pub trait StorageBackend: Send + Sync {
    /// Get the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key in the medium.
    fn clear(&self) -> Result<(), StorageError>;

    /// All keys currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Error-containing JSON wrapper around a [`StorageBackend`].
///
/// Callers cannot tell "never existed" from "existed but could not be read".
#[derive(Clone)]
pub struct Storage<B> {
    backend: B,
}

impl<B: StorageBackend> Storage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get and deserialize the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable storage entry");
                None
            }
        }
    }

    /// Get the raw, still-serialized value under `key`.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = %key, error = %e, "error getting item from storage");
                None
            }
        }
    }

    /// Serialize and store `value` under `key`. Failures are logged, not returned.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = %key, error = %e, "error serializing item for storage");
                return;
            }
        };

        if let Err(e) = self.backend.set_item(key, &raw) {
            error!(key = %key, error = %e, "error setting item in storage");
        }
    }

    /// Remove `key` if present.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            error!(key = %key, error = %e, "error removing item from storage");
        }
    }

    /// Wipe the entire backend, including keys that belong to other users of it.
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            error!(error = %e, "error clearing storage");
        }
    }

    /// All keys in the backend; empty on failure.
    pub fn keys(&self) -> Vec<String> {
        match self.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                error!(error = %e, "error listing storage keys");
                Vec::new()
            }
        }
    }
}
