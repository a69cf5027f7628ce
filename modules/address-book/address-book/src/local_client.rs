//! Local implementation of `AddressBookApi`.
//!
//! Used by in-process consumers. Delegates to the domain service and converts errors to
//! SDK error types.

use std::sync::Arc;

use address_book_sdk::{
    Address, AddressBookApi, AddressBookError, AddressFields, Neighbor, ProximityQuery,
};
use async_trait::async_trait;

use crate::module::ConcreteService;

pub struct AddressBookLocalClient {
    service: Arc<ConcreteService>,
}

impl AddressBookLocalClient {
    #[must_use]
    pub fn new(service: Arc<ConcreteService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AddressBookApi for AddressBookLocalClient {
    async fn create_address(&self, fields: AddressFields) -> Result<Address, AddressBookError> {
        self.service.create(fields).await.map_err(Into::into)
    }

    async fn get_address(&self, uid: &str) -> Result<Address, AddressBookError> {
        self.service.get(uid).await.map_err(Into::into)
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, AddressBookError> {
        self.service.list().await.map_err(Into::into)
    }

    async fn update_address(
        &self,
        uid: &str,
        fields: AddressFields,
    ) -> Result<Address, AddressBookError> {
        self.service.update(uid, fields).await.map_err(Into::into)
    }

    async fn delete_address(&self, uid: &str) -> Result<bool, AddressBookError> {
        self.service.delete(uid).await.map_err(Into::into)
    }

    async fn find_neighbors(
        &self,
        query: ProximityQuery,
    ) -> Result<Vec<Neighbor>, AddressBookError> {
        self.service.find_within(query).await.map_err(Into::into)
    }
}
