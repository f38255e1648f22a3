use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// JSON key every stored record is identified by.
pub const ID_FIELD: &str = "id";

/// Anything that can live in a collection: serializable and uniquely identified.
///
/// The store never looks at any other field. The identity it matches on is the
/// serialized `"id"` key, so `id()` must return that same value.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn id(&self) -> &str;
}

/// A record type bound to a fixed collection.
pub trait Model: Record {
    /// The collection name for this model type (e.g., "products", "users").
    const COLLECTION: &'static str;
}

/// Schema-free records: the `"id"` string field, or `""` when there is none.
impl Record for Value {
    fn id(&self) -> &str {
        self.get(ID_FIELD).and_then(Value::as_str).unwrap_or("")
    }
}

/// The identity of a stored JSON record.
///
/// Numeric ids are taken as their JSON text, so `{"id": 7}` is `"7"`.
pub(crate) fn value_id(value: &Value) -> Option<String> {
    match value.get(ID_FIELD) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Whether a stored JSON record carries `id`.
pub(crate) fn has_id(value: &Value, id: &str) -> bool {
    value_id(value).as_deref() == Some(id)
}
