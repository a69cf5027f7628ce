//! Infrastructure storage layer - SeaORM persistence for addresses.
//!
//! - `entity` - the `addresses` table definition
//! - `mapper` - conversions between entity models and SDK types
//! - `sea_orm_repo` - `AddressRepository` implementation
//! - `migrations` - schema migrations, applied at startup

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use sea_orm_repo::SeaOrmAddressRepository;
