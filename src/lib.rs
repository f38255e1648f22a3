extern crate self as pos_store;

mod config;
mod helpers;
pub mod models;
mod notify;
mod record;
pub mod seed;
mod storage;
mod store;

pub use config::{DbConfig, DEFAULT_DB_NAME, DEFAULT_DB_VERSION, ENV_DB_NAME, ENV_DB_VERSION};
pub use helpers::{
    generate_id, paginate, timestamp_now, with_timestamps, Page, Pagination, Timestamped,
    Timestamps, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
#[cfg(feature = "emitter")]
pub use notify::ChangeNotifier;
pub use notify::{ChangeEvent, ChangeKind, STORE_CHANGED};
pub use record::{Model, Record, ID_FIELD};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageBackend, StorageError};
pub use store::{
    CollectionExport, CollectionStore, CollectionUsage, DatabaseExport, ModelCollection,
    StorageUsage, RESERVED_COLLECTIONS,
};

// Re-export the derive macro under the same name as the trait
pub use pos_store_macros::Model;
