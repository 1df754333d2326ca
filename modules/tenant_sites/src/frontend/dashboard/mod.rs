//! Admin dashboard: lead list, filters, metrics and CSV export
//!
//! State lives in [`DashboardState`] and is only replaced by a completed
//! refresh. Refreshes are ticketed: results of an older refresh that
//! finish after a newer one has been applied are dropped.

pub mod export;
pub mod state;

pub use export::{csv_filename, export_csv};
pub use state::{
    conversion_rate, filter_prospects, high_priority_count, new_leads_count, DashboardState,
};

use super::http::{ClientError, SitesClient};
use crate::api::rest::dto::{AnalyticsDto, ProspectDto, UpdateProspectRequest};
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Dashboard controller bound to one backend
pub struct Dashboard {
    client: SitesClient,
    tenant: Option<String>,
    state: RwLock<DashboardState>,
    issued: AtomicU64,
}

impl Dashboard {
    /// `tenant` limits the lead list to one brand key
    pub fn new(client: SitesClient, tenant: Option<String>) -> Self {
        Self {
            client,
            tenant,
            state: RwLock::new(DashboardState::default()),
            issued: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.read().clone()
    }

    pub fn set_search(&self, query: &str) {
        self.state.write().search_query = query.to_string();
    }

    pub fn set_status_filter(&self, status: &str) {
        self.state.write().status_filter = status.to_string();
    }

    /// Local-only status change; the next refresh replaces it
    pub fn set_status(&self, id: Uuid, status: &str) -> bool {
        self.state.write().set_status(id, status)
    }

    /// Local-only notes change; the next refresh replaces it
    pub fn save_notes(&self, id: Uuid, notes: &str) -> bool {
        self.state.write().save_notes(id, notes)
    }

    /// Persist a status/notes change and mirror the stored record locally
    pub async fn persist_update(
        &self,
        id: Uuid,
        update: &UpdateProspectRequest,
    ) -> Result<ProspectDto, ClientError> {
        let stored = self.client.update_status(id, update).await?;
        let mut state = self.state.write();
        if let Some(entry) = state.prospects.iter_mut().find(|p| p.id == id) {
            *entry = stored.clone();
        }
        Ok(stored)
    }

    /// Fetch prospects and analytics; `Ok(false)` when a newer refresh won
    pub async fn refresh(&self) -> Result<bool, ClientError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = tokio::try_join!(
            self.client.fetch_prospects(self.tenant.as_deref()),
            self.client.fetch_analytics(),
        );

        match fetched {
            Ok((prospects, analytics)) => Ok(self.apply(ticket, prospects, analytics)),
            Err(e) => {
                tracing::warn!(error = %e, ticket, "Dashboard refresh failed; keeping previous data");
                Err(e)
            }
        }
    }

    fn apply(&self, ticket: u64, prospects: Vec<ProspectDto>, analytics: AnalyticsDto) -> bool {
        let mut state = self.state.write();
        if ticket <= state.generation {
            tracing::debug!(ticket, current = state.generation, "Discarding stale refresh");
            return false;
        }
        state.prospects = prospects;
        state.analytics = analytics;
        state.generation = ticket;
        state.last_refreshed = Some(Utc::now());
        true
    }

    /// CSV of every loaded prospect with its file name; filters are ignored
    pub fn export(&self, brand: &str, today: NaiveDate) -> (String, String) {
        let state = self.state.read();
        (csv_filename(brand, today), export_csv(&state.prospects))
    }

    /// CSV of the prospects passing the current status and search filters
    pub fn export_visible(&self, brand: &str, today: NaiveDate) -> (String, String) {
        let visible = self.state.read().visible();
        (csv_filename(brand, today), export_csv(&visible))
    }

    /// Refresh now and then every `interval` until cancelled
    pub fn spawn_auto_refresh(
        self: Arc<Self>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("Dashboard auto-refresh stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        // failures are logged by refresh
                        let _ = self.refresh().await;
                    }
                }
            }
        })
    }
}
