// Shared application state
// Built once at startup and handed read-only to every request task

use crate::config::Config;
use crate::upstream::TripDataClient;

/// Process-wide state shared across request tasks.
///
/// Nothing here is mutated after startup, so request tasks share it through
/// a plain `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub upstream: TripDataClient,
    /// OpenAPI document serialized once at startup, served at `/docs.json`.
    pub docs_json: String,
}

impl AppState {
    pub fn new(config: Config, upstream: TripDataClient, docs_json: String) -> Self {
        Self {
            config,
            upstream,
            docs_json,
        }
    }
}
