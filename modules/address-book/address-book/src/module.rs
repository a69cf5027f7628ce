use std::sync::Arc;

use address_book_sdk::AddressBookApi;
use axum::http::HeaderName;
use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use secrecy::SecretString;
use tracing::{info, warn};

use crate::api::rest::auth::ApiKeyAuth;
use crate::api::rest::routes;
use crate::config::AuthConfig;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmAddressRepository;
use crate::local_client::AddressBookLocalClient;

/// Type alias for the concrete service type used with the SeaORM repository.
pub type ConcreteService = Service<SeaOrmAddressRepository>;

/// Composition root: wires repository, service, REST routes and the local client.
pub struct AddressBook {
    service: Arc<ConcreteService>,
    auth: Option<ApiKeyAuth>,
    api_key_header: HeaderName,
}

impl AddressBook {
    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running address_book database migrations");
        Migrator::up(db, None).await?;
        info!("Address book database migrations completed successfully");
        Ok(())
    }

    /// Build the module over an already migrated connection.
    ///
    /// # Errors
    /// Returns an error if the auth header name is invalid, or auth is enabled without
    /// an API key.
    pub fn init(db: DatabaseConnection, auth_cfg: &AuthConfig) -> anyhow::Result<Self> {
        info!("Initializing address_book module");

        let api_key_header = HeaderName::from_bytes(auth_cfg.header.trim().as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid auth.header '{}': {e}", auth_cfg.header))?;

        let auth = if auth_cfg.enabled {
            let key = auth_cfg.api_key().ok_or_else(|| {
                anyhow::anyhow!("auth.api_key must be set when auth is enabled")
            })?;
            Some(ApiKeyAuth::new(
                api_key_header.clone(),
                SecretString::from(key.to_owned()),
            ))
        } else {
            warn!("API key authentication is disabled; address routes are unprotected");
            None
        };

        let repo = Arc::new(SeaOrmAddressRepository::new(db));
        let service = Arc::new(Service::new(repo));

        Ok(Self {
            service,
            auth,
            api_key_header,
        })
    }

    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!(
            auth = self.auth.is_some(),
            header = %self.api_key_header,
            "Registering address_book REST routes"
        );
        routes::register_routes(
            router,
            Arc::clone(&self.service),
            self.auth.clone(),
            &self.api_key_header,
        )
    }

    /// In-process client over the same service the REST routes use.
    #[must_use]
    pub fn client(&self) -> Arc<dyn AddressBookApi> {
        Arc::new(AddressBookLocalClient::new(Arc::clone(&self.service)))
    }
}
