use std::sync::Arc;

use arc_swap::ArcSwapOption;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::{openapi, routes};
use crate::config::PersonsConfig;
use crate::contract::client::PersonsApi;
use crate::domain::repo::PersonsRepository;
use crate::domain::service::Service;
use crate::gateways::local::PersonsLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmPersonsRepository;

/// The persons module: owns the domain service and exposes it over REST
/// and as an in-process client.
pub struct Persons {
    // Keep the domain service behind ArcSwap for cheap read-mostly access.
    service: ArcSwapOption<Service>,
    config: PersonsConfig,
}

impl Persons {
    pub fn new(config: PersonsConfig) -> Self {
        Self {
            service: ArcSwapOption::empty(),
            config,
        }
    }

    /// Create the `person` table if it does not exist yet.
    pub async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running persons database migrations");
        Migrator::up(db, None).await?;
        info!("Persons database migrations completed successfully");
        Ok(())
    }

    /// Wire the SeaORM repository into the domain service.
    pub fn init(&self, db: DatabaseConnection) {
        self.init_with_repo(Arc::new(SeaOrmPersonsRepository::new(db)));
    }

    /// Wire an arbitrary repository into the domain service.
    pub fn init_with_repo(&self, repo: Arc<dyn PersonsRepository>) {
        info!("Initializing persons module");
        debug!("Loaded persons config: base_path={}", self.config.base_path);
        self.service.store(Some(Arc::new(Service::new(repo))));
    }

    fn service(&self) -> anyhow::Result<Arc<Service>> {
        self.service
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client backed by the same service the routes use.
    pub fn client(&self) -> anyhow::Result<Arc<dyn PersonsApi>> {
        Ok(Arc::new(PersonsLocalClient::new(self.service()?)))
    }

    pub fn register_rest(&self, router: axum::Router) -> anyhow::Result<axum::Router> {
        info!("Registering persons REST routes");
        let base_path = self.config.normalized_base_path();
        let router = routes::register_routes(router, self.service()?, &base_path)?;
        info!(base_path = %base_path, "Persons REST routes registered successfully");
        Ok(router)
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        openapi::openapi(&self.config.normalized_base_path())
    }
}

impl Default for Persons {
    fn default() -> Self {
        Self::new(PersonsConfig::default())
    }
}
