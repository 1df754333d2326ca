//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    BusinessStatus, ContentDocument, ContentQuery, DashboardAnalytics, FormTemplate, LeadPayload,
    Prospect, ProspectUpdate, SitesApi, SitesError, TenantProfile,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SitesApi for NativeClient {
    fn resolve_tenant(&self, hostname: &str) -> TenantProfile {
        self.service.resolve_tenant(hostname).clone()
    }

    fn business_status(&self, hostname: &str) -> BusinessStatus {
        self.service.business_status(hostname, chrono::Utc::now())
    }

    async fn list_documents(
        &self,
        tenant_key: &str,
        query: &ContentQuery,
    ) -> Result<Vec<ContentDocument>, SitesError> {
        self.service.list_documents(tenant_key, query).await
    }

    async fn get_document(
        &self,
        tenant_key: &str,
        id: Uuid,
    ) -> Result<Option<ContentDocument>, SitesError> {
        self.service.get_document(tenant_key, id).await
    }

    async fn quote_form(&self, tenant_key: &str) -> Result<FormTemplate, SitesError> {
        self.service.quote_form(tenant_key).await
    }

    async fn submit_prospect(
        &self,
        tenant_key: &str,
        payload: LeadPayload,
    ) -> Result<Prospect, SitesError> {
        self.service.submit_prospect(tenant_key, payload).await
    }

    async fn list_prospects(&self, tenant_key: Option<&str>) -> Result<Vec<Prospect>, SitesError> {
        self.service.list_prospects(tenant_key).await
    }

    async fn update_prospect(
        &self,
        id: Uuid,
        update: ProspectUpdate,
    ) -> Result<Prospect, SitesError> {
        self.service.update_prospect(id, update).await
    }

    async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, SitesError> {
        self.service.dashboard_analytics().await
    }
}
