use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Creation / last-update stamps, meant to be `#[serde(flatten)]`ed into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Records carrying [`Timestamps`]. Derived by `#[derive(Model)]` when the
/// struct has a `timestamps` field.
pub trait Timestamped {
    fn timestamps_mut(&mut self) -> &mut Timestamps;
}

/// Current UTC time as ISO-8601 with milliseconds, e.g. `2024-05-01T09:30:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Stamp `updatedAt`, and `createdAt` too when `is_new`.
pub fn with_timestamps<T: Timestamped>(mut model: T, is_new: bool) -> T {
    let now = timestamp_now();
    let stamps = model.timestamps_mut();
    if is_new {
        stamps.created_at = Some(now.clone());
    }
    stamps.updated_at = Some(now);
    model
}
