//! Domain service - business logic orchestration

use super::chat;
use super::hours;
use super::registry::TenantRegistry;
use super::repository::{ChatLogRepository, ContentRepository, ProspectRepository};
use super::validation::{self, PayloadLimits};
use crate::contract::{
    lead_status, BusinessStatus, ChatExchange, ChatReply, ContentDocument, ContentQuery,
    DashboardAnalytics, DocumentBody, DocumentKind, DocumentStatus, FieldKind, FormField,
    FormTemplate, LeadPayload, LeadStats, Priority, Prospect, ProspectUpdate, SitesError,
    TenantProfile,
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Project type codes understood by the dashboard
pub const PROJECT_TYPE_CODES: &[&str] = &["cabinets", "countertops", "tile", "painting", "other"];
/// Budget range codes understood by the dashboard
pub const BUDGET_RANGE_CODES: &[&str] = &["under-5k", "5k-15k", "15k-30k", "30k-50k", "over-50k"];
/// Timeline codes understood by the dashboard
pub const TIMELINE_CODES: &[&str] = &["asap", "1-month", "3-months", "6-months", "flexible"];

const ANONYMOUS_SESSION: &str = "anonymous";

/// Quote form used when a tenant has not published its own
pub fn default_quote_form() -> FormTemplate {
    fn select(name: &str, codes: &[&str]) -> FormField {
        FormField {
            name: name.to_string(),
            kind: FieldKind::Select {
                options: codes.iter().map(|c| c.to_string()).collect(),
            },
        }
    }
    fn text(name: &str, placeholder: &str) -> FormField {
        FormField {
            name: name.to_string(),
            kind: FieldKind::Text {
                placeholder: Some(placeholder.to_string()),
            },
        }
    }

    FormTemplate {
        name: "Request a Quote".to_string(),
        fields: vec![
            text("name", "Full name"),
            text("email", "Email address"),
            text("phone", "Phone number"),
            select("project_type", PROJECT_TYPE_CODES),
            select("budget_range", BUDGET_RANGE_CODES),
            select("timeline", TIMELINE_CODES),
            FormField {
                name: "message".to_string(),
                kind: FieldKind::Textarea {
                    placeholder: Some("Tell us about your project".to_string()),
                },
            },
        ],
    }
}

/// Domain service for tenant sites
pub struct Service {
    registry: Arc<TenantRegistry>,
    content_repo: Arc<dyn ContentRepository>,
    prospect_repo: Arc<dyn ProspectRepository>,
    chat_repo: Arc<dyn ChatLogRepository>,
    limits: PayloadLimits,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        registry: Arc<TenantRegistry>,
        content_repo: Arc<dyn ContentRepository>,
        prospect_repo: Arc<dyn ProspectRepository>,
        chat_repo: Arc<dyn ChatLogRepository>,
        limits: PayloadLimits,
    ) -> Self {
        Self {
            registry,
            content_repo,
            prospect_repo,
            chat_repo,
            limits,
        }
    }

    pub fn registry(&self) -> &TenantRegistry {
        &self.registry
    }

    // ===== Tenant Operations =====

    pub fn resolve_tenant(&self, hostname: &str) -> &TenantProfile {
        self.registry.resolve(hostname)
    }

    /// Open/closed status of the tenant serving `hostname` at `now`
    pub fn business_status(&self, hostname: &str, now: DateTime<Utc>) -> BusinessStatus {
        hours::status(self.registry.resolve(hostname), now)
    }

    // ===== Content Operations =====

    /// List a tenant's documents, newest first
    pub async fn list_documents(
        &self,
        tenant_key: &str,
        query: &ContentQuery,
    ) -> Result<Vec<ContentDocument>, SitesError> {
        let tenant_key = self.registry.partition_key(tenant_key);
        self.content_repo
            .find(tenant_key, query)
            .await
            .map_err(|e| internal("list documents", e))
    }

    /// Get one document; a miss is `None`, not an error
    pub async fn get_document(
        &self,
        tenant_key: &str,
        id: Uuid,
    ) -> Result<Option<ContentDocument>, SitesError> {
        let tenant_key = self.registry.partition_key(tenant_key);
        self.content_repo
            .find_by_id(tenant_key, id)
            .await
            .map_err(|e| internal("get document", e))
    }

    /// Newest published form template of the tenant, else the built-in quote form
    pub async fn quote_form(&self, tenant_key: &str) -> Result<FormTemplate, SitesError> {
        let query = ContentQuery {
            kind: Some(DocumentKind::FormTemplate),
            status: Some(DocumentStatus::Published),
            search: None,
        };
        let documents = self.list_documents(tenant_key, &query).await?;

        let template = documents.into_iter().find_map(|doc| match doc.body {
            DocumentBody::FormTemplate(template) => Some(template),
            _ => None,
        });
        Ok(template.unwrap_or_else(default_quote_form))
    }

    // ===== Lead Operations =====

    /// Validate and store a quote form submission
    pub async fn submit_prospect(
        &self,
        tenant_key: &str,
        payload: LeadPayload,
    ) -> Result<Prospect, SitesError> {
        let tenant_key = self.registry.partition_key(tenant_key).to_string();
        let template = self.quote_form(&tenant_key).await?;

        let lead = validation::validate_lead(&payload, &template, self.limits).map_err(|e| {
            tracing::info!(tenant = %tenant_key, error = %e, "Lead submission rejected");
            e
        })?;
        for warning in &lead.warnings {
            tracing::warn!(tenant = %tenant_key, warning = %warning, "Lead accepted with warning");
        }

        let now = Utc::now();
        let priority = Priority::assess(lead.budget_range.as_deref(), lead.timeline.as_deref());
        let prospect = Prospect {
            id: Uuid::new_v4(),
            tenant_key,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            project_type: lead.project_type,
            budget_range: lead.budget_range,
            timeline: lead.timeline,
            message: lead.message,
            notes: None,
            details: lead.details,
            status: lead_status::NEW.to_string(),
            priority,
            created_at: now,
            updated_at: now,
        };

        let stored = self
            .prospect_repo
            .insert(&prospect)
            .await
            .map_err(|e| internal("insert prospect", e))?;

        tracing::info!(
            prospect_id = %stored.id,
            tenant = %stored.tenant_key,
            priority = %stored.priority,
            "New prospect stored"
        );
        Ok(stored)
    }

    /// List prospects newest first, optionally for one tenant
    pub async fn list_prospects(&self, tenant_key: Option<&str>) -> Result<Vec<Prospect>, SitesError> {
        let tenant_key = tenant_key.map(|key| self.registry.partition_key(key));
        self.prospect_repo
            .list(tenant_key)
            .await
            .map_err(|e| internal("list prospects", e))
    }

    pub async fn get_prospect(&self, id: Uuid) -> Result<Prospect, SitesError> {
        self.prospect_repo
            .find_by_id(id)
            .await
            .map_err(|e| internal("get prospect", e))?
            .ok_or_else(|| SitesError::not_found("prospect", id))
    }

    /// Persist a status and/or notes change
    pub async fn update_prospect(
        &self,
        id: Uuid,
        update: ProspectUpdate,
    ) -> Result<Prospect, SitesError> {
        if update.status.is_none() && update.notes.is_none() {
            return Err(SitesError::validation("nothing to update: status or notes required"));
        }
        if let Some(status) = &update.status {
            if status.trim().is_empty() {
                return Err(SitesError::validation("status must not be blank"));
            }
        }

        let mut prospect = self.get_prospect(id).await?;
        if let Some(status) = update.status {
            prospect.status = status.trim().to_string();
        }
        if let Some(notes) = update.notes {
            prospect.notes = Some(notes);
        }
        prospect.updated_at = Utc::now();

        let updated = self
            .prospect_repo
            .update(&prospect)
            .await
            .map_err(|e| internal("update prospect", e))?;

        tracing::info!(prospect_id = %id, status = %updated.status, "Prospect updated");
        Ok(updated)
    }

    // ===== Chat =====

    /// Answer a chat widget message; logging the exchange is best-effort
    pub async fn chat(
        &self,
        hostname: &str,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, SitesError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(SitesError::validation("message is required"));
        }

        let profile = self.registry.resolve(hostname);
        let now = Utc::now();
        let reply = chat::reply(profile, &hours::status(profile, now), message);

        let exchange = ChatExchange {
            id: Uuid::new_v4(),
            tenant_key: profile.brand_key.clone(),
            session_id: session_id
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(ANONYMOUS_SESSION)
                .to_string(),
            user_message: message.to_string(),
            response: reply.response.clone(),
            model: reply.model.clone(),
            created_at: now,
        };
        if let Err(e) = self.chat_repo.append(&exchange).await {
            tracing::error!(error = %e, tenant = %exchange.tenant_key, "Failed to log chat exchange");
        }

        Ok(reply)
    }

    // ===== Analytics =====

    pub async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, SitesError> {
        let since = Utc::now() - Duration::days(7);
        let chats = self
            .chat_repo
            .stats(since)
            .await
            .map_err(|e| internal("chat stats", e))?;

        let prospects = self.list_prospects(None).await?;
        let leads = LeadStats {
            total: prospects.len() as u64,
            high_priority: prospects
                .iter()
                .filter(|p| p.priority == Priority::High)
                .count() as u64,
            won: prospects
                .iter()
                .filter(|p| p.status == lead_status::WON)
                .count() as u64,
        };

        Ok(DashboardAnalytics { chats, leads })
    }
}

fn internal(operation: &str, error: anyhow::Error) -> SitesError {
    tracing::error!(operation, error = %error, "Repository failure");
    SitesError::Internal
}
