//! Address Book Module
//!
//! Stores postal addresses with geocoordinates and answers proximity queries
//! ("which addresses lie within D km of a point") by great-circle distance.
//!
//! ## Public API
//!
//! The public API is defined in the `address-book-sdk` crate and re-exported here:
//! - `AddressBookApi` - trait for in-process consumers
//! - `Address`, `AddressFields`, `Neighbor`, `ProximityQuery` - data models
//! - `AddressBookError` - error types
// === PUBLIC API (from SDK) ===
pub use address_book_sdk::{
    Address, AddressBookApi, AddressBookError, AddressFields, Neighbor, ProximityQuery,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::AddressBook;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests and the server binary; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
