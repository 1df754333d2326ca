mod config;
mod logging;
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tenant_sites::frontend::{dashboard, Dashboard, SitesClient};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "sites-server", version, about = "Multi-tenant marketing sites backend")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the sites API (default)
    Serve,

    /// Download the lead list as CSV, like the dashboard export button
    ExportLeads {
        /// Brand key to export; all tenants when omitted
        #[arg(long)]
        tenant: Option<String>,

        /// Only leads with this status
        #[arg(long, default_value = "")]
        status: String,

        /// Search on name, email, phone or project type
        #[arg(long, default_value = "")]
        search: String,

        /// Directory for the CSV file
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Poll the lead list on the dashboard interval and log summaries
    WatchLeads {
        #[arg(long)]
        tenant: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;
    logging::init(&cfg.logging)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(cfg).await,
        Command::ExportLeads {
            tenant,
            status,
            search,
            out_dir,
        } => export_leads(&cfg, tenant, &status, &search, out_dir).await,
        Command::WatchLeads { tenant } => watch_leads(&cfg, tenant).await,
    }
}

fn dashboard_client(cfg: &AppConfig) -> Result<SitesClient> {
    SitesClient::new(&cfg.dashboard.base_url, cfg.dashboard.request_timeout)
        .context("invalid dashboard base_url")
}

async fn export_leads(
    cfg: &AppConfig,
    tenant: Option<String>,
    status: &str,
    search: &str,
    out_dir: PathBuf,
) -> Result<()> {
    let brand = tenant.clone().unwrap_or_else(|| "all".to_string());
    let dashboard = Dashboard::new(dashboard_client(cfg)?, tenant);
    dashboard.refresh().await.context("failed to fetch leads")?;
    dashboard.set_status_filter(status);
    dashboard.set_search(search);

    let today = chrono::Utc::now().date_naive();
    let (file_name, csv) = if status.is_empty() && search.trim().is_empty() {
        dashboard.export(&brand, today)
    } else {
        dashboard.export_visible(&brand, today)
    };
    let path = out_dir.join(file_name);
    tokio::fs::write(&path, csv)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "Leads exported");
    Ok(())
}

async fn watch_leads(cfg: &AppConfig, tenant: Option<String>) -> Result<()> {
    let dashboard = Arc::new(Dashboard::new(dashboard_client(cfg)?, tenant));
    let cancel = CancellationToken::new();
    let refresher = dashboard
        .clone()
        .spawn_auto_refresh(cfg.dashboard.refresh_interval, cancel.clone());

    let mut reported = 0;
    let mut poll = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = poll.tick() => {
                let state = dashboard.snapshot();
                if state.generation == reported {
                    continue;
                }
                reported = state.generation;
                info!(
                    total = state.prospects.len(),
                    high_priority = dashboard::high_priority_count(&state.prospects),
                    new_today = dashboard::new_leads_count(&state.prospects, chrono::Utc::now().date_naive()),
                    conversion_rate = dashboard::conversion_rate(&state.prospects),
                    chats_this_week = state.analytics.chats.this_week,
                    "Lead summary"
                );
            }
        }
    }

    cancel.cancel();
    refresher.await.context("auto-refresh task failed")?;
    Ok(())
}
