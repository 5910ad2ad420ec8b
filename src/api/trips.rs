//! Trip endpoint handler
//!
//! `GET /api`: forward an optionally filtered query upstream, attach the
//! derived `trip_time` to every record, sort, reply.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::filter;
use super::response::{bad_request, json_response, server_error};
use super::transform;
use crate::config::AppState;
use crate::logger;

/// Get Trip Data
///
/// Retrieve trip data filtered by a single query parameter: fare amount,
/// distance, or payment type. Only one parameter should be provided at a
/// time.
#[utoipa::path(
    get,
    path = "/api",
    tag = "Trip API",
    params(
        ("fare_amount" = Option<String>, Query, description = "Filter by fare amount."),
        ("distance" = Option<String>, Query, description = "Filter by trip distance."),
        ("payment_type" = Option<String>, Query, description = "Filter by payment type.")
    ),
    responses(
        (status = 200, description = "Fetched Successfully"),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn handle_trips(
    query: Option<&str>,
    state: &Arc<AppState>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let enable_cors = state.config.http.enable_cors;

    // Validate parameter cardinality before anything leaves the process
    let filter = match filter::parse_query(query) {
        Ok(filter) => filter,
        Err(e) => {
            logger::log_warning(&format!("Rejected /api request: {e}"));
            return bad_request(&e.to_string(), enable_cors);
        }
    };

    let records = match state
        .upstream
        .fetch_trips(filter.as_ref().map(|(f, v)| (*f, v.as_str())))
        .await
    {
        Ok(records) => records,
        Err(e) => {
            logger::log_error(&format!("Upstream fetch failed: {e}"));
            return server_error(enable_cors);
        }
    };

    // An uninterpretable record counts as a malformed upstream body
    match transform::process_records(records) {
        Ok(timed) => json_response(StatusCode::OK, &timed, enable_cors, is_head),
        Err(e) => {
            logger::log_error(&format!("Upstream record rejected: {e}"));
            server_error(enable_cors)
        }
    }
}
