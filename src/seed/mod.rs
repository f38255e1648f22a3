//! Seeding - populate empty collections with the dashboard's fixture data.
//!
//! Each step registers its collection if needed and only inserts when the
//! collection is empty, so running it on every start is safe.

mod fixtures;

use tracing::info;

use crate::helpers::{with_timestamps, Timestamped};
use crate::models::{Payment, PaymentStatus, Product, User, UserRole};
use crate::record::Model;
use crate::storage::StorageBackend;
use crate::store::CollectionStore;

/// Seed `products`. Returns the number of records inserted.
pub fn initialize_products<B: StorageBackend>(store: &CollectionStore<B>) -> usize {
    seed(store, || {
        fixtures::PRODUCTS
            .iter()
            .map(|p| {
                let mut product = Product::new(p.id, p.name, p.category, p.price, p.stock);
                product.description = Some(format!("Description for {}", p.name));
                product
            })
            .collect()
    })
}

/// Seed `users`. Active fixture users become admins, inactive ones cashiers.
pub fn initialize_users<B: StorageBackend>(store: &CollectionStore<B>) -> usize {
    seed(store, || {
        fixtures::USERS
            .iter()
            .map(|u| {
                let role = if u.active {
                    UserRole::Admin
                } else {
                    UserRole::Cashier
                };
                let mut user = User::new(u.id, u.name, u.email, role);
                user.is_active = u.active;
                user
            })
            .collect()
    })
}

/// Seed `payments`, all completed, each dated its fixture's `days_ago` back.
///
/// `timestamp` carries that back-dated time; `createdAt` is the seeding time.
pub fn initialize_payments<B: StorageBackend>(store: &CollectionStore<B>) -> usize {
    seed(store, || {
        let now = chrono::Utc::now();
        fixtures::PAYMENTS
            .iter()
            .map(|p| {
                let when = (now - chrono::Duration::days(p.days_ago))
                    .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
                Payment {
                    id: p.id.to_string(),
                    amount: p.amount,
                    method: p.method,
                    status: PaymentStatus::Completed,
                    customer_id: None,
                    items: Vec::new(),
                    timestamp: when,
                    reference: Some(p.reference.to_string()),
                    timestamps: Default::default(),
                }
            })
            .collect()
    })
}

/// Seed every fixture collection.
pub fn initialize_database<B: StorageBackend>(store: &CollectionStore<B>) {
    initialize_products(store);
    initialize_users(store);
    initialize_payments(store);
    info!(prefix = %store.prefix(), "database initialized with fixture data");
}

fn seed<B, M, F>(store: &CollectionStore<B>, build: F) -> usize
where
    B: StorageBackend,
    M: Model + Timestamped,
    F: FnOnce() -> Vec<M>,
{
    let collection = store.models::<M>();
    collection.create();

    if collection.count() > 0 {
        return 0;
    }

    let models = build();
    for model in &models {
        collection.insert(&with_timestamps(model.clone(), true));
    }

    info!(collection = %M::COLLECTION, count = models.len(), "collection initialized with fixture data");
    models.len()
}
