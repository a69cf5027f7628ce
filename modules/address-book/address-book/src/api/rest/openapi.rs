use axum::http::HeaderName;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::openapi::{Components, OpenApi as OpenApiDoc};
use utoipa::OpenApi;

use super::dto::{AddressDto, AddressFieldsDto, HealthDto, NeighborDto};
use super::handlers;
use super::problem::Problem;

pub const API_KEY_SCHEME: &str = "api_key";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Book API",
        description = "Address storage with great-circle proximity queries"
    ),
    paths(
        handlers::create_address,
        handlers::list_addresses,
        handlers::get_address,
        handlers::update_address,
        handlers::delete_address,
        handlers::find_neighbors,
        handlers::health,
    ),
    components(schemas(AddressDto, AddressFieldsDto, NeighborDto, HealthDto, Problem)),
    tags(
        (name = "addresses", description = "Address CRUD"),
        (name = "neighbors", description = "Proximity queries"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with the API key scheme bound to `header`.
#[must_use]
pub fn build_openapi(header: &HeaderName) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.components
        .get_or_insert_with(Components::default)
        .add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(header.as_str()))),
        );
    doc
}
