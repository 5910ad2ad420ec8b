//! Outbound client for the upstream trip-data API.
//!
//! Wraps a reqwest client so the rest of the service never touches the
//! upstream's query language or transport details directly.

mod client;
mod error;
mod record;

pub use client::TripDataClient;
pub use error::UpstreamError;
pub use record::TripRecord;
