//! `AddressBookApi` trait definition.
//!
//! This trait defines the public, transport-agnostic API of the address-book module.

use async_trait::async_trait;

use crate::errors::AddressBookError;
use crate::models::{Address, AddressFields, Neighbor, ProximityQuery};

/// Public API trait for the address-book module.
///
/// ```ignore
/// let client: Arc<dyn AddressBookApi> = module.client();
/// let address = client.get_address("9b0e...").await?;
/// ```
#[async_trait]
pub trait AddressBookApi: Send + Sync {
    /// Create a new address; the store assigns its uid.
    async fn create_address(&self, fields: AddressFields) -> Result<Address, AddressBookError>;

    /// Get an address by uid.
    async fn get_address(&self, uid: &str) -> Result<Address, AddressBookError>;

    /// List every stored address, in storage order.
    async fn list_addresses(&self) -> Result<Vec<Address>, AddressBookError>;

    /// Replace every field except the uid of an existing address.
    async fn update_address(
        &self,
        uid: &str,
        fields: AddressFields,
    ) -> Result<Address, AddressBookError>;

    /// Delete an address. Returns whether a record existed.
    async fn delete_address(&self, uid: &str) -> Result<bool, AddressBookError>;

    /// Addresses within `radius_km` of the query center, nearest first.
    async fn find_neighbors(
        &self,
        query: ProximityQuery,
    ) -> Result<Vec<Neighbor>, AddressBookError>;
}
