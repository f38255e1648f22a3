use serde::{Deserialize, Serialize};

use crate::{Model, Timestamps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

impl PaymentItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(collection = "payments")]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub items: Vec<PaymentItem>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Payment {
    /// Sum of the line items, independent of the charged `amount`.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(PaymentItem::line_total).sum()
    }
}
