use std::sync::Arc;

use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    Extension,
};
use modkit_errors::{Problem, ProblemResponse};
use serde_json::{json, Value};

use crate::request_id::XRequestId;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Serve a pre-rendered OpenAPI document.
pub async fn serve_openapi(doc: Arc<Value>) -> Response {
    ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone())).into_response()
}

pub async fn serve_docs() -> Html<&'static str> {
    // Stoplight Elements from the CDN, pointed at our own document
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Persons API Docs</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}

/// Fallback for unknown routes, rendered as a problem document.
pub async fn route_not_found(uri: Uri, rid: Option<Extension<XRequestId>>) -> ProblemResponse {
    let mut problem = Problem::new(
        StatusCode::NOT_FOUND,
        "Not Found",
        format!("No route matches '{}'", uri.path()),
    )
    .with_code("api_ingress.route.not_found.v1")
    .with_instance(uri.path());
    if let Some(Extension(XRequestId(id))) = rid {
        problem = problem.with_request_id(id);
    }
    ProblemResponse(problem)
}
