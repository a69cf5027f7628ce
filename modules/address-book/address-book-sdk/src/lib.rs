//! Address Book SDK
//!
//! Public contract of the address-book module:
//! - `AddressBookApi` - trait for in-process consumers
//! - `Address`, `AddressFields`, `Neighbor`, `ProximityQuery` - data models
//! - `AddressBookError` - error types

pub mod api;
pub mod errors;
pub mod models;

pub use api::AddressBookApi;
pub use errors::AddressBookError;
pub use models::{Address, AddressFields, Neighbor, ProximityQuery};
