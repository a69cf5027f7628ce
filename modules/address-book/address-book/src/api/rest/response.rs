//! Success responses for the address routes that carry more than a JSON body.

use address_book_sdk::Address;
use axum::Json;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use super::dto::AddressDto;

/// `201 Created` with the stored address and a `Location` pointing at `/addresses/{uid}`.
///
/// `collection` is the URI the create request was posted to.
pub fn created_address(address: Address, collection: &Uri) -> Response {
    let location = format!("{}/{}", collection.path().trim_end_matches('/'), address.uid);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AddressDto::from(address)),
    )
        .into_response()
}

/// `204 No Content`, also for a uid that was already gone.
pub fn deleted() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
