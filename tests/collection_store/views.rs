//! Caller-side types used by the collection store tests.

use pos_store::Model;
use serde::{Deserialize, Serialize};

/// Partial product update; absent fields are left out of the patch.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Minimal model without timestamps or an explicit collection name.
#[derive(Clone, Debug, Serialize, Deserialize, Model)]
#[serde(rename_all = "camelCase")]
pub struct StockView {
    pub id: String,
    pub on_hand: u32,
}

impl StockView {
    pub fn new(id: &str, on_hand: u32) -> Self {
        Self {
            id: id.to_string(),
            on_hand,
        }
    }
}
