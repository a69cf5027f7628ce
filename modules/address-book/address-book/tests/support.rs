#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Shared by several test binaries; each uses a subset

//! Test support utilities for `address_book` integration tests.

use std::sync::Arc;

use address_book::config::AuthConfig;
use address_book::domain::service::Service;
use address_book::infra::storage::SeaOrmAddressRepository;
use address_book::{AddressBook, AddressFields};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use secrecy::SecretString;

pub const API_KEY: &str = "test-api-key";

/// Fresh migrated in-memory `SQLite` database.
///
/// Pinned to a single pooled connection: every `:memory:` connection is its own database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");
    AddressBook::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

pub async fn service() -> Service<SeaOrmAddressRepository> {
    let db = inmem_db().await;
    Service::new(Arc::new(SeaOrmAddressRepository::new(db)))
}

#[must_use]
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        api_key: Some(SecretString::from(API_KEY.to_owned())),
        ..AuthConfig::default()
    }
}

pub async fn module() -> AddressBook {
    AddressBook::init(inmem_db().await, &auth_config()).expect("Failed to init module")
}

/// 123 Bloomfield Ave, Montclair
#[must_use]
pub fn montclair() -> AddressFields {
    AddressFields {
        name: "Test Name".to_owned(),
        latitude: 40.824_428_180_400_41,
        longitude: -74.212_912_145_288_85,
        street_num: "123".to_owned(),
        street_name: "Bloomfield Ave".to_owned(),
        city: "Montclair".to_owned(),
        country: "USA".to_owned(),
    }
}

/// Union, NJ
#[must_use]
pub fn union_nj() -> AddressFields {
    AddressFields {
        name: "Test Name".to_owned(),
        latitude: 40.697_019_3,
        longitude: -74.309_331_7,
        street_num: "1976".to_owned(),
        street_name: "Morris Ave".to_owned(),
        city: "Union".to_owned(),
        country: "USA".to_owned(),
    }
}
