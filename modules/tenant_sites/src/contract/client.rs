//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with tenant sites.
//! NO HTTP - direct function calls.

use super::{
    error::SitesError,
    model::{
        BusinessStatus, ContentDocument, ContentQuery, DashboardAnalytics, FormTemplate,
        LeadPayload, Prospect, ProspectUpdate, TenantProfile,
    },
};
use async_trait::async_trait;
use uuid::Uuid;

/// Tenant sites API for inter-module communication
#[async_trait]
pub trait SitesApi: Send + Sync {
    // ===== Tenant Operations =====

    /// Branding for a request host; unknown hosts get the default tenant
    fn resolve_tenant(&self, hostname: &str) -> TenantProfile;

    /// Whether the tenant serving `hostname` is open right now
    fn business_status(&self, hostname: &str) -> BusinessStatus;

    // ===== Content Operations =====

    /// List a tenant's documents, newest first
    async fn list_documents(
        &self,
        tenant_key: &str,
        query: &ContentQuery,
    ) -> Result<Vec<ContentDocument>, SitesError>;

    /// Get one document of a tenant; `None` when absent
    async fn get_document(
        &self,
        tenant_key: &str,
        id: Uuid,
    ) -> Result<Option<ContentDocument>, SitesError>;

    /// Quote form template of a tenant
    async fn quote_form(&self, tenant_key: &str) -> Result<FormTemplate, SitesError>;

    // ===== Lead Operations =====

    /// Validate and store a quote form submission
    async fn submit_prospect(
        &self,
        tenant_key: &str,
        payload: LeadPayload,
    ) -> Result<Prospect, SitesError>;

    /// List prospects, newest first, optionally for one tenant
    async fn list_prospects(&self, tenant_key: Option<&str>) -> Result<Vec<Prospect>, SitesError>;

    /// Persist a status and/or notes change
    async fn update_prospect(
        &self,
        id: Uuid,
        update: ProspectUpdate,
    ) -> Result<Prospect, SitesError>;

    // ===== Analytics =====

    async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, SitesError>;
}
