// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response from a serializable body
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match serde_json::to_string_pretty(body) {
        Ok(json) => raw_json_with_status(status, &json, enable_cors, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            server_error(enable_cors)
        }
    }
}

/// Serve a pre-serialized JSON document verbatim
pub fn raw_json(json: &str, enable_cors: bool, is_head: bool) -> Response<Full<Bytes>> {
    raw_json_with_status(StatusCode::OK, json, enable_cors, is_head)
}

/// 400 Bad Request with an explanatory message
pub fn bad_request(message: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    raw_json_with_status(StatusCode::BAD_REQUEST, &body.to_string(), enable_cors, false)
}

/// 500 generic server error. Upstream details are logged, never echoed.
pub fn server_error(enable_cors: bool) -> Response<Full<Bytes>> {
    raw_json_with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Server error"}"#,
        enable_cors,
        false,
    )
}

fn raw_json_with_status(
    status: StatusCode,
    json: &str,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json.to_string())
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length);

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::from("Error")))
    })
}
