//! Layered server configuration: defaults, YAML file, then `SITES__*` env vars

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "SITES__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
    pub sites: SitesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
    /// Origins allowed by CORS; empty allows any
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 64 * 1024,
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; handed to the driver as-is
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://tenant_sites.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` overrides it
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub refresh_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            refresh_interval: tenant_sites::frontend::DEFAULT_REFRESH_INTERVAL,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Mirror of the module config so it can be layered by figment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitesSection {
    pub tenants_file: Option<std::path::PathBuf>,
    pub seed_sample_content: bool,
    pub max_payload_fields: usize,
    pub max_field_length: usize,
}

impl Default for SitesSection {
    fn default() -> Self {
        let module = tenant_sites::config::Config::default();
        Self {
            tenants_file: module.tenants_file,
            seed_sample_content: module.seed_sample_content,
            max_payload_fields: module.max_payload_fields,
            max_field_length: module.max_field_length,
        }
    }
}

impl From<SitesSection> for tenant_sites::config::Config {
    fn from(section: SitesSection) -> Self {
        Self {
            tenants_file: section.tenants_file,
            seed_sample_content: section.seed_sample_content,
            max_payload_fields: section.max_payload_fields,
            max_field_length: section.max_field_length,
        }
    }
}

impl AppConfig {
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
        }
        Self::figment(file)
            .extract()
            .context("invalid configuration")
    }
}
