//! HTTP server assembly and lifecycle

use crate::config::{AppConfig, DatabaseConfig, ServerConfig};
use anyhow::{Context, Result};
use axum::{http::HeaderValue, Router};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tenant_sites::SitesModule;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .context("failed to establish database connection")
}

fn cors_layer(cfg: &ServerConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.cors_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = cfg
        .cors_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{}'", o)))
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Module routes wrapped in the HTTP middleware stack
pub fn app(module: &SitesModule, cfg: &ServerConfig) -> Result<Router> {
    Ok(module
        .router()
        .layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes))
        .layer(TimeoutLayer::new(cfg.request_timeout))
        .layer(cors_layer(cfg)?)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

/// Connect, initialize the module and serve until Ctrl-C
pub async fn run(cfg: AppConfig) -> Result<()> {
    let db = connect(&cfg.database).await?;
    let module = SitesModule::init(cfg.sites.clone().into(), db)
        .await
        .context("failed to initialize tenant sites module")?;

    let app = app(&module, &cfg.server)?;
    let listener = TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;

    info!(address = %cfg.server.bind_addr, "Tenant sites server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
