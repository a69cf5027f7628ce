use std::sync::Arc;

use address_book_sdk::ProximityQuery;
use axum::extract::{Extension, Path, Query};
use axum::http::Uri;
use axum::response::Response;
use axum::Json;
use tracing::info;

use super::dto::{AddressDto, AddressFieldsDto, HealthDto, NeighborDto, NeighborsQuery};
use super::error::{domain_error_to_problem, ApiResult};
use super::problem::Problem;
use super::response::{created_address, deleted};
use crate::domain::error::DomainError;
use crate::module::ConcreteService;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

#[utoipa::path(
    post,
    path = "/addresses",
    tag = "addresses",
    request_body = AddressFieldsDto,
    responses(
        (status = 201, description = "Address created", body = AddressDto),
        (status = 400, description = "Invalid coordinates", body = Problem, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn create_address(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Json(req): Json<AddressFieldsDto>,
) -> ApiResult<Response> {
    info!(name = %req.name, "Creating address");

    let created = svc.create(req.into()).await.map_err(at(&uri))?;
    Ok(created_address(created, &uri))
}

#[utoipa::path(
    get,
    path = "/addresses",
    tag = "addresses",
    responses(
        (status = 200, description = "Every stored address", body = [AddressDto]),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn list_addresses(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
) -> ApiResult<Json<Vec<AddressDto>>> {
    let addresses = svc.list().await.map_err(at(&uri))?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/addresses/{uid}",
    tag = "addresses",
    params(("uid" = String, Path, description = "Address uid")),
    responses(
        (status = 200, description = "The address", body = AddressDto),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown uid", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn get_address(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Path(uid): Path<String>,
) -> ApiResult<Json<AddressDto>> {
    let address = svc.get(&uid).await.map_err(at(&uri))?;
    Ok(Json(address.into()))
}

#[utoipa::path(
    put,
    path = "/addresses/{uid}",
    tag = "addresses",
    params(("uid" = String, Path, description = "Address uid")),
    request_body = AddressFieldsDto,
    responses(
        (status = 200, description = "Address replaced", body = AddressDto),
        (status = 400, description = "Invalid coordinates", body = Problem, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown uid", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn update_address(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Path(uid): Path<String>,
    Json(req): Json<AddressFieldsDto>,
) -> ApiResult<Json<AddressDto>> {
    info!(uid = %uid, "Updating address");

    let updated = svc.update(&uid, req.into()).await.map_err(at(&uri))?;
    Ok(Json(updated.into()))
}

/// Deleting an unknown uid still answers 204.
#[utoipa::path(
    delete,
    path = "/addresses/{uid}",
    tag = "addresses",
    params(("uid" = String, Path, description = "Address uid")),
    responses(
        (status = 204, description = "Address deleted (or never existed)"),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn delete_address(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Path(uid): Path<String>,
) -> ApiResult<Response> {
    svc.delete(&uid).await.map_err(at(&uri))?;
    Ok(deleted())
}

#[utoipa::path(
    get,
    path = "/neighbors",
    tag = "neighbors",
    params(NeighborsQuery),
    responses(
        (status = 200, description = "Addresses within the radius, nearest first", body = [NeighborDto]),
        (status = 400, description = "Invalid center coordinates", body = Problem, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid API key", body = Problem, content_type = "application/problem+json"),
    ),
    security(("api_key" = []))
)]
pub async fn find_neighbors(
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Query(q): Query<NeighborsQuery>,
) -> ApiResult<Json<Vec<NeighborDto>>> {
    let query = ProximityQuery {
        latitude: q.lat,
        longitude: q.long,
        radius_km: q.distance,
    };
    let neighbors = svc.find_within(query).await.map_err(at(&uri))?;
    Ok(Json(neighbors.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthDto))
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
    })
}
