//! Public models for the address-book module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the address-book module and its consumers. Views are built by
//! composition: `Address` embeds `AddressFields`, and `Neighbor` embeds `Address`.

/// Caller-editable fields of an address.
///
/// Used as the payload for both create and update; `uid` is never part of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressFields {
    /// Descriptive name of the place.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street_num: String,
    pub street_name: String,
    pub city: String,
    pub country: String,
}

impl AddressFields {
    /// Fields with only the required values set; optional text fields are empty.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

/// A stored address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    /// Opaque identifier assigned by the store at creation.
    pub uid: String,
    pub fields: AddressFields,
}

/// A stored address paired with its distance from a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub address: Address,
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
}

/// Center and radius of a proximity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}
