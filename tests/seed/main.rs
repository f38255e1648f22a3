//! Integration tests for fixture seeding.

use pos_store::models::{Payment, PaymentMethod, PaymentStatus, Product, User, UserRole};
use pos_store::seed::{initialize_database, initialize_payments, initialize_products, initialize_users};
use pos_store::{CollectionStore, MemoryStorage};

fn store() -> CollectionStore<MemoryStorage> {
    CollectionStore::with_defaults(MemoryStorage::new())
}

#[test]
fn seeds_all_collections() {
    let store = store();
    initialize_database(&store);

    assert_eq!(
        store.get_collections(),
        vec!["products".to_string(), "users".to_string(), "payments".to_string()]
    );
    assert_eq!(store.count("products"), 5);
    assert_eq!(store.count("users"), 4);
    assert_eq!(store.count("payments"), 3);
}

#[test]
fn seeding_is_idempotent() {
    let store = store();
    assert_eq!(initialize_products(&store), 5);
    assert_eq!(initialize_products(&store), 0);
    assert_eq!(store.count("products"), 5);
}

#[test]
fn existing_data_is_not_overwritten() {
    let store = store();
    store.insert("users", &User::new("me", "Only Me", "me@example.com", UserRole::Manager));

    assert_eq!(initialize_users(&store), 0);

    let users = store.models::<User>().all();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, UserRole::Manager);
}

#[test]
fn seeded_products_are_active_and_stamped() {
    let store = store();
    initialize_products(&store);

    let monitor = store.models::<Product>().get("p4").unwrap();
    assert_eq!(monitor.name, "27\" 4K Monitor");
    assert_eq!(monitor.description.as_deref(), Some("Description for 27\" 4K Monitor"));
    assert!(monitor.is_active);
    assert!(monitor.timestamps.created_at.is_some());
    assert_eq!(monitor.timestamps.created_at, monitor.timestamps.updated_at);
}

#[test]
fn seeded_users_map_status_to_role() {
    let store = store();
    initialize_users(&store);

    let users = store.models::<User>();
    let mia = users.get("u3").unwrap();
    assert!(!mia.is_active);
    assert_eq!(mia.role, UserRole::Cashier);

    let admins = users.find(|u| u.role == UserRole::Admin);
    assert_eq!(admins.len(), 3);
    assert!(admins.iter().all(|u| u.is_active));
}

#[test]
fn seeded_payments_are_completed() {
    let store = store();
    initialize_payments(&store);

    let payments: Vec<Payment> = store.models::<Payment>().all();
    assert!(payments.iter().all(|p| p.status == PaymentStatus::Completed));
    assert_eq!(payments[2].method, PaymentMethod::Mobile);
    assert_eq!(payments[0].reference.as_deref(), Some("#A12F4"));
    // Newest first, as in the fixture list.
    assert!(payments[0].timestamp > payments[2].timestamp);
}

#[test]
fn payment_timestamp_is_back_dated_but_created_at_is_now() {
    let store = store();
    initialize_payments(&store);

    let oldest = store.models::<Payment>().get("pay3").unwrap();
    let created_at = oldest.timestamps.created_at.as_deref().unwrap();
    assert!(oldest.timestamp.as_str() < created_at);
}
