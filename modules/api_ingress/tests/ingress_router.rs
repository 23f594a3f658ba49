//! Integration tests for the ingress router: built-in endpoints and limits.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use tower::util::ServiceExt;
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

use api_ingress::{ApiIngress, ApiIngressConfig, BODY_LIMIT_BYTES};

fn doc() -> utoipa::openapi::OpenApi {
    OpenApiBuilder::new()
        .info(InfoBuilder::new().title("Persons API").version("v1").build())
        .build()
}

fn ingress(enable_docs: bool) -> ApiIngress {
    ApiIngress::new(
        ApiIngressConfig {
            enable_docs,
            cors_enabled: true,
        },
        Duration::from_secs(5),
    )
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let router = ingress(false).build_router(Router::new(), None).unwrap();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_and_docs_served_when_enabled() {
    let router = ingress(true).build_router(Router::new(), Some(doc())).unwrap();

    let response = router
        .clone()
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "Persons API");
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));

    let response = router
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(ct.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn docs_hidden_when_disabled() {
    let router = ingress(false).build_router(Router::new(), Some(doc())).unwrap();

    let response = router
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_problem_404() {
    let router = ingress(false).build_router(Router::new(), None).unwrap();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/nowhere")
                .header("x-request-id", "req-nowhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["instance"], "/nowhere");
    assert_eq!(json["request_id"], "req-nowhere");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = Router::new().route("/echo", post(|body: String| async move { body }));
    let router = ingress(false).build_router(app, None).unwrap();

    let big = vec![b'a'; BODY_LIMIT_BYTES + 1];
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/echo")
                .header(header::CONTENT_LENGTH, big.len())
                .body(Body::from(big))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn module_routes_are_kept() {
    let app = Router::new().route("/person", get(|| async { "[]" }));
    let router = ingress(false).build_router(app, None).unwrap();

    let response = router
        .oneshot(Request::builder().uri("/person").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
