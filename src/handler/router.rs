//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching and dispatch.

use crate::api;
use crate::config::AppState;
use crate::docs;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Generic over the body type: the routes only read the request head, and
/// tests exercise the router without a hyper connection behind it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Only the head is read; the body (empty for GET) is dropped here
    let (parts, _) = req.into_parts();
    let is_head = parts.method == Method::HEAD;
    let enable_cors = state.config.http.enable_cors;

    if state.config.logging.access_log {
        logger::log_request(&parts.method, &parts.uri, parts.version);
    }

    if let Some(resp) = check_http_method(&parts.method, enable_cors) {
        return Ok(resp);
    }

    let response = match parts.uri.path() {
        "/" => http::build_html_response(homepage_html(), enable_cors, is_head),
        "/api" => api::handle_trips(parts.uri.query(), &state, is_head).await,
        "/docs" => http::build_html_response(docs::swagger_ui_html(), enable_cors, is_head),
        "/docs.json" => api::response::raw_json(&state.docs_json, enable_cors, is_head),
        _ => http::build_404_response(),
    };

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Landing page linking the API and its documentation
fn homepage_html() -> String {
    r#"<a href="/api">/api</a> to access the API or <a href="/docs">docs</a>"#.to_string()
}
