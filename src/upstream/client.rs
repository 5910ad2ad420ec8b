//! Thin HTTP client for the upstream trip-data API.

use reqwest::{Client, Url};
use std::time::Duration;

use super::error::UpstreamError;
use super::record::TripRecord;
use crate::api::filter::TripFilter;
use crate::config::UpstreamConfig;

/// Client for the upstream trip-data API.
///
/// Holds the base URL, the forwarded application token and a pooled
/// reqwest client with a request timeout. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TripDataClient {
    client: Client,
    base_url: Url,
    app_token: String,
}

impl TripDataClient {
    /// Build a client from the upstream configuration.
    ///
    /// Fails when the configured base URL does not parse or the transport
    /// cannot be constructed; callers treat either as a startup error.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url).map_err(UpstreamError::BaseUrl)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url,
            app_token: config.app_token.clone(),
        })
    }

    /// Fetch trip records, optionally narrowed by a single equality filter.
    ///
    /// The filter is attached as a URL-encoded `$where` query pair; with no
    /// filter the base URL is requested unmodified. Non-success statuses and
    /// unparseable bodies surface as errors, never as partial data.
    pub async fn fetch_trips(
        &self,
        filter: Option<(TripFilter, &str)>,
    ) -> Result<Vec<TripRecord>, UpstreamError> {
        let mut url = self.base_url.clone();
        if let Some((filter, value)) = filter {
            let clause = format!("{} = {}", filter.upstream_field(), value);
            url.query_pairs_mut().append_pair("$where", &clause);
        }

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("X-App-Token", &self.app_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response
            .json::<Vec<TripRecord>>()
            .await
            .map_err(UpstreamError::Body)
    }
}
