//! Documentation publisher
//!
//! Assembles the OpenAPI description of the service once at startup and
//! provides the Swagger UI shell that renders it. The document is
//! declarative data; nothing here runs per request beyond serving bytes.

use utoipa::OpenApi;

/// Swagger UI build the viewer shell loads from the CDN.
const SWAGGER_UI_VERSION: &str = "5.17.14";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trip API",
        description = "API endpoints for analytics Trip API documented on Swagger.",
        version = "1.0.0",
        contact(
            name = "Trip Analytics Backend",
            url = "https://github.com/trip-analytics/trip-api-server"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local server"),
        (url = "https://trip-api-server.vercel.app", description = "Live server")
    ),
    paths(crate::api::trips::handle_trips),
    tags(
        (name = "Trip API", description = "Trip data retrieval")
    )
)]
struct ApiDoc;

/// Serialize the OpenAPI document.
///
/// Called once at startup; a failure here is a fatal configuration error
/// and the listener never binds.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}

/// Static HTML shell for the interactive viewer.
///
/// Loads the Swagger UI assets from the CDN and points them at
/// `/docs.json`, so the page itself never goes stale.
pub fn swagger_ui_html() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Trip API Docs</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/{SWAGGER_UI_VERSION}/swagger-ui.min.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/{SWAGGER_UI_VERSION}/swagger-ui-bundle.min.js"></script>
  <script>
    window.onload = () => {{
      SwaggerUIBundle({{
        url: "/docs.json",
        dom_id: "#swagger-ui",
      }});
    }};
  </script>
</body>
</html>
"##
    )
}
