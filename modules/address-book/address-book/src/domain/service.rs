//! Domain service layer - the address store and proximity query.
//!
//! The service is the only component that mutates persisted address state. It validates
//! coordinates, assigns uids, and delegates persistence to an `AddressRepository`.

use std::sync::Arc;

use address_book_sdk::{Address, AddressFields, Neighbor, ProximityQuery};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::proximity::neighbors_within;
use crate::domain::repo::AddressRepository;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Reject coordinates outside `[-90, 90]` x `[-180, 180]` (NaN included).
///
/// # Errors
/// Returns `DomainError::Validation` naming the offending field.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(DomainError::validation(
            "latitude",
            format!("latitude must be from -90 to 90, got {latitude}"),
        ));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(DomainError::validation(
            "longitude",
            format!("longitude must be from -180 to 180, got {longitude}"),
        ));
    }
    Ok(())
}

/// Address store service.
pub struct Service<R: AddressRepository> {
    repo: Arc<R>,
}

impl<R: AddressRepository> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: AddressRepository> Service<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new address under a freshly generated uid.
    ///
    /// # Errors
    /// `Validation` for out-of-range coordinates, `Database` on storage failure.
    pub async fn create(&self, fields: AddressFields) -> Result<Address, DomainError> {
        validate_coordinates(fields.latitude, fields.longitude)?;

        let address = Address {
            uid: Uuid::new_v4().to_string(),
            fields,
        };
        let created = self.repo.insert(address).await?;

        info!(uid = %created.uid, "Address created");
        Ok(created)
    }

    /// # Errors
    /// `NotFound` when no address has this uid, `Database` on storage failure.
    pub async fn get(&self, uid: &str) -> Result<Address, DomainError> {
        debug!(uid, "Getting address by uid");

        self.repo.find_by_uid(uid).await?.ok_or_else(|| {
            warn!(uid, "uid not found");
            DomainError::not_found(uid)
        })
    }

    /// Every stored address, in insertion order (plain scan of the rowid table).
    ///
    /// # Errors
    /// `Database` on storage failure.
    pub async fn list(&self) -> Result<Vec<Address>, DomainError> {
        let addresses = self.repo.list_all().await?;
        debug!(count = addresses.len(), "Listed addresses");
        Ok(addresses)
    }

    /// Replace every field except the uid.
    ///
    /// # Errors
    /// `Validation` for out-of-range coordinates, `NotFound` when the uid does not
    /// exist (nothing is created), `Database` on storage failure.
    pub async fn update(&self, uid: &str, fields: AddressFields) -> Result<Address, DomainError> {
        validate_coordinates(fields.latitude, fields.longitude)?;

        let address = Address {
            uid: uid.to_owned(),
            fields,
        };
        let updated = self.repo.update(address).await?.ok_or_else(|| {
            warn!(uid, "uid not found for update");
            DomainError::not_found(uid)
        })?;

        info!(uid, "Address updated");
        Ok(updated)
    }

    /// Delete an address. Deleting an unknown uid is a no-op that returns `false`.
    ///
    /// # Errors
    /// `Database` on storage failure.
    pub async fn delete(&self, uid: &str) -> Result<bool, DomainError> {
        let removed = self.repo.delete(uid).await?;
        if removed {
            info!(uid, "Address deleted");
        } else {
            debug!(uid, "Delete of unknown uid ignored");
        }
        Ok(removed)
    }

    /// Addresses within `query.radius_km` kilometers of the query center, nearest first.
    ///
    /// Scans every stored address. A negative or NaN radius matches nothing.
    ///
    /// # Errors
    /// `Validation` for an out-of-range center, `Database` on storage failure.
    pub async fn find_within(&self, query: ProximityQuery) -> Result<Vec<Neighbor>, DomainError> {
        validate_coordinates(query.latitude, query.longitude)?;

        let addresses = self.repo.list_all().await?;
        let scanned = addresses.len();
        let neighbors = neighbors_within(addresses, &query);

        debug!(
            latitude = query.latitude,
            longitude = query.longitude,
            radius_km = query.radius_km,
            scanned,
            matched = neighbors.len(),
            "Proximity query evaluated"
        );
        Ok(neighbors)
    }

    /// # Errors
    /// `Database` on storage failure.
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repo.count().await
    }
}
