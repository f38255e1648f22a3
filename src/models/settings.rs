use serde::{Deserialize, Serialize};

use crate::{Model, Timestamps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Store-wide settings; normally a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(collection = "settings")]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: String,
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub currency: String,
    pub tax_rate: f64,
    pub theme: Theme,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}
