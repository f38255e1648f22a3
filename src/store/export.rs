use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DbConfig;

/// Snapshot of a whole namespace, suitable for "download as JSON".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseExport {
    pub info: DbConfig,
    pub collections: Vec<CollectionExport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionExport {
    pub name: String,
    pub records: Vec<Value>,
}

impl DatabaseExport {
    pub fn collection(&self, name: &str) -> Option<&CollectionExport> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUsage {
    pub name: String,
    pub records: usize,
    /// Key plus serialized array.
    pub bytes: usize,
}

/// Serialized footprint of a namespace. `total_bytes` includes the
/// metadata and registry entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub collections: Vec<CollectionUsage>,
    pub total_bytes: usize,
}
