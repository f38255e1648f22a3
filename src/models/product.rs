use serde::{Deserialize, Serialize};

use crate::{Model, Timestamps};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(collection = "products")]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            stock,
            image_url: None,
            sku: None,
            is_active: true,
            timestamps: Timestamps::default(),
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
