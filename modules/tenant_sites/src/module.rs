//! Module assembly and lifecycle

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::domain::{Service, TenantRegistry};
use crate::infra::storage::{
    migrations::Migrator, seed, SeaOrmChatLogRepository, SeaOrmContentRepository,
    SeaOrmProspectRepository,
};
use anyhow::{Context, Result};
use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Tenant sites module: registry, storage and the domain service wired together
pub struct SitesModule {
    config: Config,
    service: Arc<Service>,
}

impl SitesModule {
    /// Load the tenant registry, migrate the database and build the service
    pub async fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        let registry = match &config.tenants_file {
            Some(path) => TenantRegistry::from_path(path)?,
            None => TenantRegistry::builtin()?,
        };
        tracing::info!(
            tenants = registry.tenants().len(),
            default = %registry.default_tenant().hostname,
            "Tenant registry loaded"
        );

        Migrator::up(&db, None)
            .await
            .context("failed to run database migrations")?;

        let conn = Arc::new(db);
        let content_repo = Arc::new(SeaOrmContentRepository::new(conn.clone()));
        let prospect_repo = Arc::new(SeaOrmProspectRepository::new(conn.clone()));
        let chat_repo = Arc::new(SeaOrmChatLogRepository::new(conn));

        if config.seed_sample_content {
            seed::seed_if_empty(content_repo.as_ref(), &registry)
                .await
                .context("failed to seed sample content")?;
        }

        let service = Arc::new(Service::new(
            Arc::new(registry),
            content_repo,
            prospect_repo,
            chat_repo,
            config.payload_limits(),
        ));

        tracing::info!("Tenant sites module initialized");
        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn native_client(&self) -> Arc<NativeClient> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// REST routes of the module
    pub fn router(&self) -> Router {
        crate::api::rest::register_routes(Router::new(), self.service.clone())
    }
}
