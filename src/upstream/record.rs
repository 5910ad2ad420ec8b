// Upstream record shape

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A trip record as the upstream returns it.
///
/// Only the two timestamps are interpreted by this service; every other
/// field is captured untyped and passed through unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripRecord {
    pub pickup_datetime: String,
    pub dropoff_datetime: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
