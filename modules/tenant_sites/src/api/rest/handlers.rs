//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::lead_payload_from_json,
};
use crate::contract::{ContentQuery, DocumentStatus, SitesError};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

pub const SERVICE_NAME: &str = "tenant-sites";

pub async fn health(service: Arc<Service>, host: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        business_status: service.business_status(host, Utc::now()).into(),
    })
}

pub async fn business_status(service: Arc<Service>, host: &str) -> Json<BusinessStatusDto> {
    Json(service.business_status(host, Utc::now()).into())
}

// ===== Branding & Content Handlers =====

pub async fn branding(service: Arc<Service>, host: &str) -> Json<BrandingDto> {
    Json(service.resolve_tenant(host).into())
}

/// Query parameters for listing content
#[derive(Debug, Default, Deserialize)]
pub struct ListContentQuery {
    /// Document type tag
    pub r#type: Option<String>,
    /// draft | published; published when omitted
    pub status: Option<String>,
    /// Case-insensitive substring of title or description
    pub q: Option<String>,
}

impl TryFrom<ListContentQuery> for ContentQuery {
    type Error = SitesError;

    fn try_from(query: ListContentQuery) -> Result<Self, Self::Error> {
        let kind = query
            .r#type
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(SitesError::validation)?;
        let status = match query.status.as_deref() {
            Some(s) => s.parse().map_err(SitesError::validation)?,
            None => DocumentStatus::Published,
        };
        Ok(Self {
            kind,
            status: Some(status),
            search: query.q,
        })
    }
}

pub async fn list_content(
    service: Arc<Service>,
    host: &str,
    Query(query): Query<ListContentQuery>,
) -> Result<Json<ContentListResponse>, Problem> {
    let query = ContentQuery::try_from(query).map_err(map_domain_error)?;
    let tenant_key = service.resolve_tenant(host).brand_key.clone();

    let documents = service
        .list_documents(&tenant_key, &query)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<ContentDocumentDto> = documents.into_iter().map(Into::into).collect();
    let total = items.len();
    Ok(Json(ContentListResponse { items, total }))
}

pub async fn get_content(
    service: Arc<Service>,
    host: &str,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentDocumentDto>, Problem> {
    let tenant_key = service.resolve_tenant(host).brand_key.clone();
    let document = service
        .get_document(&tenant_key, id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(SitesError::not_found("document", id)))?;

    Ok(Json(document.into()))
}

pub async fn quote_form(service: Arc<Service>, host: &str) -> Result<Json<FormTemplateDto>, Problem> {
    let tenant_key = service.resolve_tenant(host).brand_key.clone();
    let template = service.quote_form(&tenant_key).await.map_err(map_domain_error)?;
    Ok(Json(template.into()))
}

// ===== Prospect Handlers =====

/// Store a quote form submission for the tenant of the request host
pub async fn submit_prospect(
    service: Arc<Service>,
    host: &str,
    Json(body): Json<BTreeMap<String, serde_json::Value>>,
) -> Result<(StatusCode, Json<ProspectDto>), Problem> {
    let payload = lead_payload_from_json(body).map_err(map_domain_error)?;
    let tenant_key = service.resolve_tenant(host).brand_key.clone();

    let prospect = service
        .submit_prospect(&tenant_key, payload)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(prospect.into())))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProspectsQuery {
    /// Brand key filter
    pub tenant: Option<String>,
}

pub async fn list_prospects(
    service: Arc<Service>,
    Query(query): Query<ListProspectsQuery>,
) -> Result<Json<Vec<ProspectDto>>, Problem> {
    let prospects = service
        .list_prospects(query.tenant.as_deref().filter(|t| !t.is_empty()))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(prospects.into_iter().map(Into::into).collect()))
}

pub async fn get_prospect(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProspectDto>, Problem> {
    let prospect = service.get_prospect(id).await.map_err(map_domain_error)?;
    Ok(Json(prospect.into()))
}

pub async fn update_prospect(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProspectRequest>,
) -> Result<Json<ProspectDto>, Problem> {
    let prospect = service
        .update_prospect(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(prospect.into()))
}

// ===== Analytics & Chat Handlers =====

pub async fn dashboard_analytics(service: Arc<Service>) -> Result<Json<AnalyticsDto>, Problem> {
    let analytics = service.dashboard_analytics().await.map_err(map_domain_error)?;
    Ok(Json(analytics.into()))
}

pub async fn chat(
    service: Arc<Service>,
    host: &str,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponseDto>, Problem> {
    let reply = service
        .chat(host, &req.message, req.session_id.as_deref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(reply.into()))
}
