use std::sync::Arc;

use axum::http::HeaderName;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};

use super::auth::{require_api_key, ApiKeyAuth};
use super::handlers;
use super::openapi::build_openapi;
use crate::module::ConcreteService;

/// Address and neighbor routes, guarded by `auth` when present, plus the public
/// `/health` and `/openapi.json` endpoints.
pub fn register_routes(
    router: Router,
    service: Arc<ConcreteService>,
    auth: Option<ApiKeyAuth>,
    api_key_header: &HeaderName,
) -> Router {
    let mut guarded = Router::new()
        .route(
            "/addresses",
            get(handlers::list_addresses).post(handlers::create_address),
        )
        .route(
            "/addresses/{uid}",
            get(handlers::get_address)
                .put(handlers::update_address)
                .delete(handlers::delete_address),
        )
        .route("/neighbors", get(handlers::find_neighbors));

    if let Some(auth) = auth {
        guarded = guarded.route_layer(middleware::from_fn_with_state(auth, require_api_key));
    }

    let doc = Arc::new(build_openapi(api_key_header));
    let public = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/openapi.json",
            get(move || {
                let doc = Arc::clone(&doc);
                async move { Json(doc.as_ref().clone()) }
            }),
        );

    router
        .merge(guarded.layer(Extension(service)))
        .merge(public)
}
