//! ModelCollection - typed accessor for one model's collection.

use std::marker::PhantomData;

use serde::Serialize;

use super::CollectionStore;
use crate::helpers::{paginate, Page};
use crate::record::Model;
use crate::storage::StorageBackend;

/// Typed view over `M::COLLECTION`.
///
/// Provides the store's operations without repeating the collection name or
/// the record type at every call site.
pub struct ModelCollection<'a, B, M> {
    store: &'a CollectionStore<B>,
    _marker: PhantomData<M>,
}

impl<'a, B: StorageBackend, M: Model> ModelCollection<'a, B, M> {
    pub fn new(store: &'a CollectionStore<B>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        M::COLLECTION
    }

    /// Register the collection. False if it already exists.
    pub fn create(&self) -> bool {
        self.store.create_collection(M::COLLECTION)
    }

    pub fn all(&self) -> Vec<M> {
        self.store.get_all(M::COLLECTION)
    }

    pub fn get(&self, id: &str) -> Option<M> {
        self.store.get_by_id(M::COLLECTION, id)
    }

    pub fn insert(&self, model: &M) -> M {
        self.store.insert(M::COLLECTION, model)
    }

    pub fn update<P: Serialize + ?Sized>(&self, id: &str, patch: &P) -> Option<M> {
        self.store.update(M::COLLECTION, id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(M::COLLECTION, id)
    }

    pub fn find(&self, predicate: impl Fn(&M) -> bool) -> Vec<M> {
        self.store.find(M::COLLECTION, predicate)
    }

    pub fn find_one(&self, predicate: impl Fn(&M) -> bool) -> Option<M> {
        self.store.find_one(M::COLLECTION, predicate)
    }

    pub fn count(&self) -> usize {
        self.store.count(M::COLLECTION)
    }

    /// Load everything, then slice out one page.
    pub fn page(&self, page: usize, page_size: usize) -> Page<M> {
        paginate(&self.all(), page, page_size)
    }
}
