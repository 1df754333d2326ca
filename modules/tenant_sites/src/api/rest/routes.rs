//! Route registration and the OpenAPI document

use super::{dto::*, error::Problem, handlers, tenant::TenantHost};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

/// Schemas of every REST payload
#[derive(OpenApi)]
#[openapi(
    info(title = "Tenant Sites API"),
    components(schemas(
        HealthResponse,
        BusinessStatusDto,
        BrandingDto,
        ColorSchemeDto,
        BrandAssetsDto,
        ServiceOfferingDto,
        ContentDocumentDto,
        ContentListResponse,
        FormTemplateDto,
        FormFieldDto,
        ProspectDto,
        UpdateProspectRequest,
        AnalyticsDto,
        ChatStatsDto,
        LeadStatsDto,
        ChatRequest,
        ChatResponseDto,
        Problem
    ))
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/api/health", get(health_handler))
        .route("/api/business-status", get(business_status_handler))
        .route("/api/openapi.json", get(openapi_handler))
        // Branding & content
        .route("/api/branding", get(branding_handler))
        .route("/api/content", get(list_content_handler))
        .route("/api/content/{id}", get(get_content_handler))
        .route("/api/forms/quote", get(quote_form_handler))
        // Leads
        .route(
            "/api/prospects",
            post(submit_prospect_handler).get(list_prospects_handler),
        )
        .route("/api/prospects/{id}", get(get_prospect_handler))
        .route("/api/prospects/{id}/status", put(update_prospect_handler))
        // Dashboard & chat
        .route("/api/analytics/dashboard", get(dashboard_analytics_handler))
        .route("/api/chat", post(chat_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ===== Handler wrappers that extract service from Extension =====

async fn health_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
) -> Json<HealthResponse> {
    handlers::health(service, &host).await
}

async fn business_status_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
) -> Json<BusinessStatusDto> {
    handlers::business_status(service, &host).await
}

async fn branding_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
) -> Json<BrandingDto> {
    handlers::branding(service, &host).await
}

async fn list_content_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
    query: Query<handlers::ListContentQuery>,
) -> Result<Json<ContentListResponse>, Problem> {
    handlers::list_content(service, &host, query).await
}

async fn get_content_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
    path: Path<Uuid>,
) -> Result<Json<ContentDocumentDto>, Problem> {
    handlers::get_content(service, &host, path).await
}

async fn quote_form_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
) -> Result<Json<FormTemplateDto>, Problem> {
    handlers::quote_form(service, &host).await
}

async fn submit_prospect_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
    json: Json<BTreeMap<String, serde_json::Value>>,
) -> Result<(StatusCode, Json<ProspectDto>), Problem> {
    handlers::submit_prospect(service, &host, json).await
}

async fn list_prospects_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::ListProspectsQuery>,
) -> Result<Json<Vec<ProspectDto>>, Problem> {
    handlers::list_prospects(service, query).await
}

async fn get_prospect_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<Uuid>,
) -> Result<Json<ProspectDto>, Problem> {
    handlers::get_prospect(service, path).await
}

async fn update_prospect_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<Uuid>,
    json: Json<UpdateProspectRequest>,
) -> Result<Json<ProspectDto>, Problem> {
    handlers::update_prospect(service, path, json).await
}

async fn dashboard_analytics_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<AnalyticsDto>, Problem> {
    handlers::dashboard_analytics(service).await
}

async fn chat_handler(
    Extension(service): Extension<Arc<Service>>,
    TenantHost(host): TenantHost,
    json: Json<ChatRequest>,
) -> Result<Json<ChatResponseDto>, Problem> {
    handlers::chat(service, &host, json).await
}
