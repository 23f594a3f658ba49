//! HTTP ingress: global middleware, health and docs endpoints, and the server loop.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// Owns the outer HTTP surface around the module routers.
#[derive(Debug, Clone)]
pub struct ApiIngress {
    config: ApiIngressConfig,
    request_timeout: Duration,
}

impl Default for ApiIngress {
    fn default() -> Self {
        Self::new(ApiIngressConfig::default(), DEFAULT_REQUEST_TIMEOUT)
    }
}

impl ApiIngress {
    /// A zero timeout selects [`DEFAULT_REQUEST_TIMEOUT`].
    pub fn new(config: ApiIngressConfig, request_timeout: Duration) -> Self {
        let request_timeout = if request_timeout.is_zero() {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            request_timeout
        };
        Self {
            config,
            request_timeout,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Wrap the module routes with health/docs endpoints and global middleware.
    pub fn build_router(
        &self,
        app: Router,
        openapi: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        tracing::debug!("Building ingress router");
        let mut router = app
            .route("/health", get(web::health_check))
            .fallback(web::route_not_found);

        if self.config.enable_docs {
            if let Some(doc) = openapi {
                // Render once, serve as static JSON
                let doc = Arc::new(serde_json::to_value(&doc)?);
                router = router
                    .route(
                        "/openapi.json",
                        get(move || web::serve_openapi(doc.clone())),
                    )
                    .route("/docs", get(web::serve_docs));
                tracing::info!("API docs mounted at /docs");
            }
        }

        // Layers are added innermost first; the effective order, outermost to innermost, is:
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions -> Timeout -> CORS -> BodyLimit
        let x_request_id = request_id::header();

        router = router.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));
        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }
        router = router.layer(TimeoutLayer::new(self.request_timeout));
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));
        router = router.layer(request_id::create_trace_layer());
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        Ok(router)
    }
}

/// Bind `addr` and serve `router` until `shutdown` resolves.
pub async fn serve<F>(router: Router, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
