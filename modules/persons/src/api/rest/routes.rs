use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Mount the person routes under `base_path` (e.g. `/person`).
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    base_path: &str,
) -> anyhow::Result<Router> {
    if !base_path.starts_with('/') || base_path.len() < 2 || base_path.ends_with('/') {
        anyhow::bail!("invalid base path '{base_path}'");
    }

    let persons = Router::new()
        .route(
            base_path,
            get(handlers::find_all)
                .post(handlers::create)
                .put(handlers::update),
        )
        .route(
            &format!("{base_path}/{{id}}"),
            get(handlers::find_by_id).delete(handlers::delete),
        )
        .layer(Extension(service));

    Ok(router.merge(persons))
}
