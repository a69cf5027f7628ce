use address_book_sdk::Address;
use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Repository trait for address persistence operations.
///
/// Every method touches at most one record; implementations run writes in their own
/// scoped transaction.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Persist a new address. The uid must not exist yet.
    async fn insert(&self, address: Address) -> Result<Address, DomainError>;

    /// Find an address by uid.
    async fn find_by_uid(&self, uid: &str) -> Result<Option<Address>, DomainError>;

    /// Every stored address, in storage order.
    async fn list_all(&self) -> Result<Vec<Address>, DomainError>;

    /// Replace all fields of the address with the same uid.
    /// Returns `None` when no such record exists.
    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError>;

    /// Delete by uid. Returns whether a record was removed.
    async fn delete(&self, uid: &str) -> Result<bool, DomainError>;

    /// Number of stored addresses.
    async fn count(&self) -> Result<u64, DomainError>;
}
