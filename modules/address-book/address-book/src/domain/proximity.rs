//! Linear-scan proximity filter.
//!
//! Every query computes the distance to every address: O(n) per call, no spatial index.

use address_book_sdk::{Address, Neighbor, ProximityQuery};

use crate::domain::geo::distance_km;

/// Addresses within `query.radius_km` of the query center, nearest first.
///
/// An address is included iff its distance is `<= radius_km`, so a zero radius keeps
/// exact matches only and a negative (or NaN) radius keeps nothing. Equal distances
/// are ordered by uid.
#[must_use]
pub fn neighbors_within<I>(addresses: I, query: &ProximityQuery) -> Vec<Neighbor>
where
    I: IntoIterator<Item = Address>,
{
    if query.radius_km.is_nan() || query.radius_km < 0.0 {
        return Vec::new();
    }

    let mut neighbors: Vec<Neighbor> = addresses
        .into_iter()
        .filter_map(|address| {
            let distance_km = distance_km(
                query.latitude,
                query.longitude,
                address.fields.latitude,
                address.fields.longitude,
            );
            (distance_km <= query.radius_km).then_some(Neighbor {
                address,
                distance_km,
            })
        })
        .collect();

    neighbors.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.address.uid.cmp(&b.address.uid))
    });
    neighbors
}
