//! CollectionStore - named collections of records over a flat key-value substrate.
//!
//! Every key the store touches lives under a versioned namespace
//! `P = "{name}_v{version}"`:
//!
//! - `P_info` holds the [`DbConfig`] the namespace was created with,
//! - `P_collections` holds the ordered registry of collection names,
//! - `P_{collection}` holds that collection's records as one JSON array.
//!
//! Every operation reads the whole array, works on it in memory and writes the
//! whole array back. Nothing here is atomic across calls: two stores sharing
//! one backend are last-write-wins per array.
//!
//! ## Example
//!
//! ```ignore
//! use pos_store::{CollectionStore, DbConfig, MemoryStorage};
//! use serde_json::json;
//!
//! let store = CollectionStore::new(MemoryStorage::new(), DbConfig::default());
//! store.insert("products", &json!({"id": "p1", "price": 10}));
//! let cheap: Vec<serde_json::Value> = store.find("products", |p: &serde_json::Value| p["price"] == 10);
//! ```

mod collection;
mod export;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::DbConfig;
use crate::notify::{ChangeEvent, ChangeKind};
#[cfg(feature = "emitter")]
use crate::notify::ChangeNotifier;
use crate::record::{has_id, value_id, Model, Record};
use crate::storage::{Storage, StorageBackend};

pub use collection::ModelCollection;
pub use export::{CollectionExport, CollectionUsage, DatabaseExport, StorageUsage};

const INFO_SUFFIX: &str = "info";
const REGISTRY_SUFFIX: &str = "collections";

/// Collection names that would collide with the namespace's own keys.
pub const RESERVED_COLLECTIONS: [&str; 2] = [INFO_SUFFIX, REGISTRY_SUFFIX];

/// Document-style store: collections, CRUD and linear-scan queries.
///
/// Not-found outcomes are reported through `bool` / `Option` results, never
/// errors. Substrate failures are logged by [`Storage`] and read as absent.
pub struct CollectionStore<B> {
    storage: Storage<B>,
    config: DbConfig,
    prefix: String,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl<B: StorageBackend> CollectionStore<B> {
    /// Open the namespace described by `config`, initializing it on first use.
    pub fn new(backend: B, config: DbConfig) -> Self {
        let store = Self {
            storage: Storage::new(backend),
            prefix: config.prefix(),
            config,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        };
        store.initialize();
        store
    }

    /// Open the default `posAdminDb_v1` namespace.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, DbConfig::default())
    }

    /// Open a namespace that broadcasts on an existing (possibly shared) notifier.
    #[cfg(feature = "emitter")]
    pub fn with_notifier(backend: B, config: DbConfig, notifier: ChangeNotifier) -> Self {
        let store = Self {
            storage: Storage::new(backend),
            prefix: config.prefix(),
            config,
            notifier,
        };
        store.initialize();
        store
    }

    fn initialize(&self) {
        let info_key = self.key(INFO_SUFFIX);
        if self.storage.get::<DbConfig>(&info_key).is_none() {
            debug!(prefix = %self.prefix, "first run, initializing namespace");
            self.storage.set(&info_key, &self.config);
            self.storage.set(&self.key(REGISTRY_SUFFIX), &Vec::<String>::new());
        }
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// The `{name}_v{version}` namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// Metadata stored under `P_info`.
    pub fn info(&self) -> Option<DbConfig> {
        self.storage.get(&self.key(INFO_SUFFIX))
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Registered collection names, in creation order.
    pub fn get_collections(&self) -> Vec<String> {
        self.storage
            .get(&self.key(REGISTRY_SUFFIX))
            .unwrap_or_default()
    }

    fn has_collection(&self, name: &str) -> bool {
        self.get_collections().iter().any(|c| c == name)
    }

    /// Register `name` and give it an empty array. False if already registered
    /// or if the name is reserved.
    pub fn create_collection(&self, name: &str) -> bool {
        if RESERVED_COLLECTIONS.contains(&name) {
            warn!(collection = %name, "refusing to create collection with reserved name");
            return false;
        }

        let mut collections = self.get_collections();
        if collections.iter().any(|c| c == name) {
            return false;
        }

        collections.push(name.to_string());
        self.storage.set(&self.key(REGISTRY_SUFFIX), &collections);
        self.storage.set(&self.key(name), &Vec::<Value>::new());

        debug!(collection = %name, "created collection");
        self.changed(ChangeEvent::new(ChangeKind::CollectionCreated, name));
        true
    }

    /// Unregister `name` and delete its array. False if it was not registered.
    pub fn drop_collection(&self, name: &str) -> bool {
        let collections = self.get_collections();
        if !collections.iter().any(|c| c == name) {
            return false;
        }

        let remaining: Vec<String> = collections.into_iter().filter(|c| c != name).collect();
        self.storage.set(&self.key(REGISTRY_SUFFIX), &remaining);
        self.storage.remove(&self.key(name));

        debug!(collection = %name, "dropped collection");
        self.changed(ChangeEvent::new(ChangeKind::CollectionDropped, name));
        true
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    fn read_records(&self, collection: &str) -> Vec<Value> {
        self.storage.get(&self.key(collection)).unwrap_or_default()
    }

    fn write_records(&self, collection: &str, records: &[Value]) {
        self.storage.set(&self.key(collection), records);
    }

    /// All records, in insertion order. Unknown collections read as empty;
    /// records that do not decode as `T` are skipped.
    pub fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        self.read_records(collection)
            .into_iter()
            .filter_map(|value| decode(collection, value))
            .collect()
    }

    /// The first record whose id is `id`.
    pub fn get_by_id<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Option<T> {
        self.read_records(collection)
            .into_iter()
            .find(|value| has_id(value, id))
            .and_then(|value| decode(collection, value))
    }

    /// All records matching `predicate`, in insertion order.
    pub fn find<T, F>(&self, collection: &str, predicate: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        self.get_all(collection)
            .into_iter()
            .filter(|record| predicate(record))
            .collect()
    }

    /// The first record matching `predicate`.
    pub fn find_one<T, F>(&self, collection: &str, predicate: F) -> Option<T>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        self.get_all(collection)
            .into_iter()
            .find(|record| predicate(record))
    }

    /// Number of stored records, decodable or not.
    pub fn count(&self, collection: &str) -> usize {
        self.read_records(collection).len()
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Upsert: replace the record with the same id in place, or append.
    /// Registers the collection first if needed. Returns the record.
    pub fn insert<T: Record>(&self, collection: &str, record: &T) -> T {
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                error!(collection = %collection, id = %record.id(), error = %e, "error serializing record");
                return record.clone();
            }
        };
        let id = value_id(&value);

        if !self.has_collection(collection) && !self.create_collection(collection) {
            warn!(collection = %collection, id = ?id, "insert skipped, collection unavailable");
            return record.clone();
        }

        let mut records = self.read_records(collection);
        let existing = id
            .as_deref()
            .and_then(|id| records.iter().position(|v| has_id(v, id)));
        match existing {
            Some(index) => records[index] = value,
            None => records.push(value),
        }
        self.write_records(collection, &records);

        self.changed(ChangeEvent::new(ChangeKind::Inserted, collection));
        record.clone()
    }

    /// Shallow-merge `patch` (which must serialize to a JSON object) over the
    /// record with `id`. Returns the merged record, or `None` without writing
    /// when the id is unknown or the merge cannot be decoded as `T`.
    pub fn update<T, P>(&self, collection: &str, id: &str, patch: &P) -> Option<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let mut records = self.read_records(collection);
        let index = records.iter().position(|v| has_id(v, id))?;

        let patch = match serde_json::to_value(patch) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                warn!(collection = %collection, id = %id, patch = %other, "update patch is not an object");
                return None;
            }
            Err(e) => {
                error!(collection = %collection, id = %id, error = %e, "error serializing update patch");
                return None;
            }
        };

        let mut merged = records[index].clone();
        let Some(fields) = merged.as_object_mut() else {
            warn!(collection = %collection, id = %id, "stored record is not an object, cannot merge");
            return None;
        };
        fields.extend(patch);

        let updated: T = decode(collection, merged.clone())?;
        records[index] = merged;
        self.write_records(collection, &records);

        self.changed(ChangeEvent::new(ChangeKind::Updated, collection));
        Some(updated)
    }

    /// Remove every record with `id`. False if nothing was removed.
    pub fn delete(&self, collection: &str, id: &str) -> bool {
        let mut records = self.read_records(collection);
        let before = records.len();
        records.retain(|v| !has_id(v, id));

        if records.len() == before {
            return false;
        }

        self.write_records(collection, &records);
        self.changed(ChangeEvent::new(ChangeKind::Deleted, collection));
        true
    }

    /// Delete every registered collection's records and empty the registry.
    /// Keys outside this namespace are left alone.
    pub fn clear(&self) {
        for collection in self.get_collections() {
            self.storage.remove(&self.key(&collection));
        }
        self.storage.set(&self.key(REGISTRY_SUFFIX), &Vec::<String>::new());

        debug!(prefix = %self.prefix, "cleared namespace");
        self.changed(ChangeEvent::cleared());
    }

    // ------------------------------------------------------------------
    // Typed access, export, notifications
    // ------------------------------------------------------------------

    /// Typed accessor for the collection `M::COLLECTION`.
    pub fn models<M: Model>(&self) -> ModelCollection<'_, B, M> {
        ModelCollection::new(self)
    }

    /// Every registered collection with its raw records, in registry order.
    pub fn export(&self) -> DatabaseExport {
        let collections = self
            .get_collections()
            .into_iter()
            .map(|name| CollectionExport {
                records: self.read_records(&name),
                name,
            })
            .collect();

        DatabaseExport {
            info: self.info().unwrap_or_else(|| self.config.clone()),
            collections,
        }
    }

    /// Serialized size of the namespace, per collection and in total.
    pub fn usage(&self) -> StorageUsage {
        let entry_bytes = |key: &str| {
            self.storage
                .get_raw(key)
                .map(|raw| key.len() + raw.len())
                .unwrap_or(0)
        };

        let collections: Vec<CollectionUsage> = self
            .get_collections()
            .into_iter()
            .map(|name| CollectionUsage {
                records: self.count(&name),
                bytes: entry_bytes(&self.key(&name)),
                name,
            })
            .collect();

        let total_bytes = collections.iter().map(|c| c.bytes).sum::<usize>()
            + entry_bytes(&self.key(INFO_SUFFIX))
            + entry_bytes(&self.key(REGISTRY_SUFFIX));

        StorageUsage {
            collections,
            total_bytes,
        }
    }

    #[cfg(feature = "emitter")]
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Shorthand for `notifier().on_change(listener)`.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&self, listener: F) -> Option<String>
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        self.notifier.on_change(listener)
    }

    #[cfg(feature = "emitter")]
    fn changed(&self, event: ChangeEvent) {
        self.notifier.notify(event);
    }

    #[cfg(not(feature = "emitter"))]
    fn changed(&self, _event: ChangeEvent) {}
}

fn decode<T: DeserializeOwned>(collection: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(collection = %collection, error = %e, "skipping record that does not match the requested type");
            None
        }
    }
}
