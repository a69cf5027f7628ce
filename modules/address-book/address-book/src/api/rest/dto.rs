use address_book_sdk::{Address, AddressFields, Neighbor};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for create and full replace.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddressFieldsDto {
    pub name: String,
    /// Degrees, -90 to 90
    pub latitude: f64,
    /// Degrees, -180 to 180
    pub longitude: f64,
    #[serde(default)]
    pub street_num: String,
    #[serde(default)]
    pub street_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl From<AddressFieldsDto> for AddressFields {
    fn from(d: AddressFieldsDto) -> Self {
        Self {
            name: d.name,
            latitude: d.latitude,
            longitude: d.longitude,
            street_num: d.street_num,
            street_name: d.street_name,
            city: d.city,
            country: d.country,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressDto {
    pub uid: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street_num: String,
    pub street_name: String,
    pub city: String,
    pub country: String,
}

impl From<Address> for AddressDto {
    fn from(a: Address) -> Self {
        let f = a.fields;
        Self {
            uid: a.uid,
            name: f.name,
            latitude: f.latitude,
            longitude: f.longitude,
            street_num: f.street_num,
            street_name: f.street_name,
            city: f.city,
            country: f.country,
        }
    }
}

/// An address plus its distance from the query center.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NeighborDto {
    #[serde(flatten)]
    pub address: AddressDto,
    /// Kilometers
    pub distance: f64,
}

impl From<Neighbor> for NeighborDto {
    fn from(n: Neighbor) -> Self {
        Self {
            address: n.address.into(),
            distance: n.distance_km,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NeighborsQuery {
    /// Latitude of the center, degrees
    pub lat: f64,
    /// Longitude of the center, degrees
    pub long: f64,
    /// Radius in kilometers
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
