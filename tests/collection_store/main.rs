//! Integration tests for CollectionStore over the in-memory substrate.

mod views;

use pos_store::models::{Product, User, UserRole};
use pos_store::{paginate, CollectionStore, DbConfig, MemoryStorage, Model};
use serde_json::{json, Value};
use views::{ProductPatch, StockView};

fn store() -> CollectionStore<MemoryStorage> {
    CollectionStore::with_defaults(MemoryStorage::new())
}

fn priced(id: &str, price: f64) -> Product {
    Product::new(id, format!("Product {}", id), "General", price, 10)
}

#[test]
fn insert_then_get_round_trips() {
    let store = store();
    let mut product = priced("p1", 12.99);
    product.sku = Some("SKU-1".into());
    product.description = Some("Premium organic coffee beans".into());

    store.insert("products", &product);

    let loaded: Product = store.get_by_id("products", "p1").unwrap();
    assert_eq!(loaded, product);
}

#[test]
fn upsert_twice_keeps_length() {
    let store = store();
    let product = priced("p1", 5.0);

    store.insert("products", &product);
    store.insert("products", &product);

    let all: Vec<Product> = store.get_all("products");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], product);
}

#[test]
fn update_preserves_untouched_fields() {
    let store = store();
    let product = priced("p1", 12.99);
    store.insert("products", &product);

    let updated: Product = store
        .update("products", "p1", &json!({"price": 14.99, "stock": 45}))
        .unwrap();

    assert_eq!(updated.price, 14.99);
    assert_eq!(updated.stock, 45);
    assert_eq!(updated.name, product.name);
    assert_eq!(updated.category, product.category);
    assert_eq!(updated.is_active, product.is_active);
}

#[test]
fn typed_patch_struct_skips_absent_fields() {
    let store = store();
    store.insert("products", &priced("p1", 12.99));

    let patch = ProductPatch {
        stock: Some(0),
        ..Default::default()
    };
    let updated: Product = store.update("products", "p1", &patch).unwrap();

    assert_eq!(updated.stock, 0);
    assert_eq!(updated.price, 12.99);
    assert!(!updated.in_stock());
}

#[test]
fn delete_removes_exactly_one() {
    let store = store();
    for id in ["p1", "p2", "p3"] {
        store.insert("products", &priced(id, 1.0));
    }

    assert!(store.delete("products", "p2"));
    assert!(store.get_by_id::<Product>("products", "p2").is_none());
    assert_eq!(store.get_all::<Product>("products").len(), 2);
}

#[test]
fn not_found_leaves_collection_unchanged() {
    let store = store();
    store.insert("products", &priced("p1", 1.0));
    let before: Vec<Value> = store.get_all("products");

    assert!(store.get_by_id::<Product>("products", "ghost").is_none());
    assert!(store
        .update::<Product, _>("products", "ghost", &json!({"price": 2.0}))
        .is_none());
    assert!(!store.delete("products", "ghost"));

    let after: Vec<Value> = store.get_all("products");
    assert_eq!(before, after);
}

#[test]
fn registry_consistency() {
    let store = store();

    assert!(store.create_collection("x"));
    let collections = store.get_collections();
    assert_eq!(collections.iter().filter(|c| *c == "x").count(), 1);
    assert!(store.get_all::<Value>("x").is_empty());

    assert!(store.drop_collection("x"));
    assert!(!store.get_collections().contains(&"x".to_string()));
}

#[test]
fn find_prices_above_threshold_in_insertion_order() {
    let store = store();
    for (i, price) in [10.0, 20.0, 30.0, 40.0, 50.0].into_iter().enumerate() {
        store.insert("products", &priced(&format!("p{}", i + 1), price));
    }

    let found: Vec<Product> = store.find("products", |p: &Product| p.price > 25.0);

    let prices: Vec<f64> = found.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![30.0, 40.0, 50.0]);
}

#[test]
fn deactivate_user() {
    let store = store();
    assert!(store.create_collection("users"));
    store.insert("users", &json!({"id": "u1", "isActive": true}));

    let updated: Value = store
        .update("users", "u1", &json!({"isActive": false}))
        .unwrap();
    assert_eq!(updated["isActive"], false);

    let loaded: Value = store.get_by_id("users", "u1").unwrap();
    assert_eq!(loaded["isActive"], false);
}

#[test]
fn model_collection_accessor() {
    let store = store();
    let users = store.models::<User>();
    assert_eq!(users.name(), "users");

    users.insert(&User::new("u1", "Ava Carter", "ava@example.com", UserRole::Admin));
    users.insert(&User::new("u2", "Mia Chen", "mia@example.com", UserRole::Cashier));

    let cashiers = users.find(|u| u.role == UserRole::Cashier);
    assert_eq!(cashiers.len(), 1);
    assert_eq!(cashiers[0].name, "Mia Chen");

    let deactivated = users.update("u2", &json!({"isActive": false})).unwrap();
    assert!(!deactivated.is_active);

    assert_eq!(users.find_one(|u| !u.is_active).unwrap().id, "u2");
    assert!(users.delete("u1"));
    assert_eq!(users.count(), 1);
    assert_eq!(store.get_collections(), vec![User::COLLECTION.to_string()]);
}

#[test]
fn custom_model_uses_default_collection_name() {
    let store = store();
    let stock = store.models::<StockView>();
    assert_eq!(StockView::COLLECTION, "stock_views");

    stock.insert(&StockView::new("p1", 3));
    assert_eq!(stock.get("p1").unwrap().on_hand, 3);
    assert_eq!(store.get_collections(), vec!["stock_views".to_string()]);
}

#[test]
fn paginate_loaded_collection() {
    let store = store();
    for i in 1..=23 {
        store.insert("products", &priced(&format!("p{}", i), i as f64));
    }

    let products = store.models::<Product>();
    let page = products.page(3, 10);
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.data[0].id, "p21");
    assert_eq!(page.pagination.total_pages, 3);

    let clamped = paginate(&products.all(), 0, 10);
    assert_eq!(clamped.pagination.page, 1);
    let clamped = paginate(&products.all(), 999, 10);
    assert_eq!(clamped.pagination.page, 3);
}

#[test]
fn stores_sharing_a_backend_see_each_other() {
    let backend = MemoryStorage::new();
    let tab_a = CollectionStore::with_defaults(backend.clone());
    let tab_b = CollectionStore::with_defaults(backend);

    tab_a.insert("products", &priced("p1", 1.0));

    assert_eq!(tab_b.get_collections(), vec!["products".to_string()]);
    assert!(tab_b.get_by_id::<Product>("products", "p1").is_some());
}

#[test]
fn last_write_wins_across_instances() {
    let backend = MemoryStorage::new();
    let tab_a = CollectionStore::with_defaults(backend.clone());
    let tab_b = CollectionStore::with_defaults(backend);
    tab_a.insert("products", &priced("p1", 1.0));

    // Tab B works from a copy loaded before tab A's next write.
    let stale: Vec<Value> = tab_b.get_all("products");

    tab_a.insert("products", &priced("p2", 2.0));
    tab_b
        .storage()
        .set(&format!("{}_products", tab_b.prefix()), &stale);

    assert!(tab_a.get_by_id::<Product>("products", "p2").is_none());
}

#[test]
fn namespaces_are_isolated() {
    let backend = MemoryStorage::new();
    let pos = CollectionStore::with_defaults(backend.clone());
    let kiosk = CollectionStore::new(backend, DbConfig::new("kioskDb", 1));

    pos.insert("products", &priced("p1", 1.0));

    assert!(kiosk.get_collections().is_empty());
    kiosk.clear();
    assert_eq!(pos.count("products"), 1);
}

#[test]
fn quota_exceeded_write_is_dropped() {
    let store = CollectionStore::with_defaults(MemoryStorage::with_quota(512));
    store.insert("products", &priced("p1", 1.0));

    let mut huge = priced("p2", 2.0);
    huge.description = Some("x".repeat(1024));
    store.insert("products", &huge);

    let all: Vec<Product> = store.get_all("products");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "p1");
}

#[cfg(feature = "emitter")]
mod notifications {
    use super::*;
    use pos_store::{ChangeEvent, ChangeKind, ChangeNotifier};
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    fn recv(rx: &mpsc::Receiver<ChangeEvent>) -> ChangeEvent {
        // EventEmitter is async, give it time
        rx.recv_timeout(Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn mutations_are_broadcast() {
        let store = store();
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        store.on_change(move |event| {
            let _ = tx.lock().unwrap().send(event);
        });

        assert!(store.create_collection("products"));
        assert_eq!(recv(&rx), ChangeEvent::new(ChangeKind::CollectionCreated, "products"));

        store.insert("products", &priced("p1", 1.0));
        assert_eq!(recv(&rx).kind, ChangeKind::Inserted);

        store.clear();
        assert_eq!(recv(&rx), ChangeEvent::cleared());
    }

    #[test]
    fn not_found_is_silent() {
        let store = store();
        store.create_collection("products");

        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        store.on_change(move |event| {
            let _ = tx.lock().unwrap().send(event);
        });

        assert!(!store.delete("products", "ghost"));
        assert!(!store.create_collection("products"));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn shared_notifier_reaches_other_views() {
        let backend = MemoryStorage::new();
        let notifier = ChangeNotifier::new();
        let editor =
            CollectionStore::with_notifier(backend.clone(), DbConfig::default(), notifier.clone());
        let viewer = CollectionStore::with_notifier(backend, DbConfig::default(), notifier);

        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        viewer.on_change(move |event| {
            let _ = tx.lock().unwrap().send(event);
        });

        editor.insert("users", &json!({"id": "u9"}));

        // Collection creation and the insert; listener threads may deliver in any order.
        let mut kinds = vec![recv(&rx).kind, recv(&rx).kind];
        kinds.sort_by_key(|kind| *kind == ChangeKind::Inserted);
        assert_eq!(kinds, vec![ChangeKind::CollectionCreated, ChangeKind::Inserted]);
        assert_eq!(viewer.count("users"), 1);
    }
}
