//! REST DTOs with serde derives for HTTP API
//!
//! The same types are deserialized by the HTTP client in `frontend`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "tenant-sites")]
    pub service: String,
    /// Status of the tenant serving the request host
    pub business_status: BusinessStatusDto,
}

/// Open/closed status of a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BusinessStatusDto {
    /// open | closed
    #[schema(example = "open")]
    pub status: String,
    #[schema(example = "We're Open! Call us at 216-268-2990")]
    pub message: String,
    #[schema(example = "Mon-Fri 8AM-5PM, Sat 9AM-3PM")]
    pub hours_today: String,
    #[schema(example = "Monday")]
    pub current_day: String,
}

// ===== Branding DTOs =====

/// Branding of the tenant resolved from the request host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BrandingDto {
    #[schema(example = "giorgiy.org")]
    pub hostname: String,
    #[schema(example = "giorgiy")]
    pub brand_key: String,
    pub company_name: String,
    pub tagline: String,
    pub specialty: String,
    pub location: String,
    #[schema(example = "216-268-2990")]
    pub phone: String,
    pub colors: ColorSchemeDto,
    pub assets: BrandAssetsDto,
    pub services: Vec<ServiceOfferingDto>,
    #[serde(default)]
    #[schema(example = "Mon-Fri 8AM-5PM, Sat 9AM-3PM")]
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorSchemeDto {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BrandAssetsDto {
    pub logo: String,
    pub hero_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceOfferingDto {
    pub name: String,
    pub icon: String,
    pub description: String,
}

// ===== Content DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDocumentDto {
    pub id: Uuid,
    pub tenant_key: String,
    /// Body type tag
    #[serde(rename = "type")]
    #[schema(example = "service")]
    pub doc_type: String,
    #[schema(example = "published")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tagged document body
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentListResponse {
    pub items: Vec<ContentDocumentDto>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormTemplateDto {
    #[schema(example = "Kitchen Cabinet Quote")]
    pub name: String,
    pub fields: Vec<FormFieldDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormFieldDto {
    #[schema(example = "budget_range")]
    pub name: String,
    /// select | text | textarea
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

// ===== Prospect DTOs =====

/// Stored prospect as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProspectDto {
    pub id: Uuid,
    #[serde(default)]
    #[schema(example = "giorgiy")]
    pub tenant: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[schema(example = "cabinets")]
    pub project_type: Option<String>,
    #[serde(default)]
    #[schema(example = "15k-30k")]
    pub budget_range: Option<String>,
    #[serde(default)]
    #[schema(example = "asap")]
    pub timeline: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    #[serde(default = "default_status")]
    #[schema(example = "new")]
    pub status: String,
    #[serde(default = "default_priority")]
    #[schema(example = "normal")]
    pub priority: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    crate::contract::lead_status::NEW.to_string()
}

fn default_priority() -> String {
    "normal".to_string()
}

/// Staff triage change; at least one field is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProspectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "contacted")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ===== Analytics DTOs =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsDto {
    pub chats: ChatStatsDto,
    pub leads: LeadStatsDto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatStatsDto {
    pub total: u64,
    pub this_week: u64,
    pub unique_sessions: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatsDto {
    pub total: u64,
    pub high_priority: u64,
    pub won: u64,
}

// ===== Chat DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[schema(example = "What services do you offer?")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponseDto {
    pub response: String,
    #[schema(example = "simple")]
    pub model: String,
}
