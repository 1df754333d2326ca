//! Contract models for tenant sites
//!
//! These models are transport-agnostic and used for inter-module communication.
//! Only the document body payloads carry serde derives: they are stored and
//! served verbatim as JSON.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ===== Tenant branding =====

/// Complete branding profile of one tenant site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantProfile {
    /// Canonical hostname without a "www." prefix (e.g., "giorgiy.org")
    pub hostname: String,
    /// Short brand key used as the storage partition key
    pub brand_key: String,
    pub company_name: String,
    pub tagline: String,
    pub specialty: String,
    pub location: String,
    /// Published phone number, also used as the contact fallback
    pub phone: String,
    pub colors: ColorScheme,
    pub assets: BrandAssets,
    /// Ordered list of offered services
    pub services: Vec<ServiceOffering>,
    pub hours: BusinessHours,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandAssets {
    pub logo: String,
    pub hero_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub name: String,
    /// Icon token (e.g., "fas fa-hammer")
    pub icon: String,
    pub description: String,
}

/// Weekly opening hours, evaluated at a fixed UTC offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    /// Schedule as shown to visitors (e.g., "Mon-Fri 8AM-5PM, Sat 9AM-3PM")
    pub summary: String,
    pub utc_offset: FixedOffset,
    /// Monday first; `None` is a closed day
    pub weekly: [Option<OpeningWindow>; 7],
}

/// Opening window of one day; both ends are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningWindow {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Open or closed at a given instant, with the visitor-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessStatus {
    pub is_open: bool,
    pub message: String,
    pub hours: String,
    /// Weekday name in the tenant's offset (e.g., "Monday")
    pub current_day: String,
}

// ===== Content documents =====

/// Publication status of a content document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Draft,
    Published,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown document status '{}'", other)),
        }
    }
}

/// Type tag of a content document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Service,
    Testimonial,
    BlogPost,
    KnowledgeBaseEntry,
    FormTemplate,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Testimonial => "testimonial",
            Self::BlogPost => "blog_post",
            Self::KnowledgeBaseEntry => "knowledge_base_entry",
            Self::FormTemplate => "form_template",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(Self::Service),
            "testimonial" => Ok(Self::Testimonial),
            "blog_post" => Ok(Self::BlogPost),
            "knowledge_base_entry" => Ok(Self::KnowledgeBaseEntry),
            "form_template" => Ok(Self::FormTemplate),
            other => Err(format!("unknown document type '{}'", other)),
        }
    }
}

/// A unit of tenant-scoped content
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    pub id: Uuid,
    /// Brand key of the owning tenant
    pub tenant_key: String,
    pub status: DocumentStatus,
    pub body: DocumentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentDocument {
    pub fn kind(&self) -> DocumentKind {
        self.body.kind()
    }
}

/// Variant-specific payload of a content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentBody {
    Service(ServicePage),
    Testimonial(Testimonial),
    BlogPost(BlogPost),
    KnowledgeBaseEntry(KnowledgeBaseEntry),
    FormTemplate(FormTemplate),
}

impl DocumentBody {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Service(_) => DocumentKind::Service,
            Self::Testimonial(_) => DocumentKind::Testimonial,
            Self::BlogPost(_) => DocumentKind::BlogPost,
            Self::KnowledgeBaseEntry(_) => DocumentKind::KnowledgeBaseEntry,
            Self::FormTemplate(_) => DocumentKind::FormTemplate,
        }
    }

    /// Searchable title
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Service(s) => Some(&s.title),
            Self::Testimonial(t) => Some(&t.customer_name),
            Self::BlogPost(p) => Some(&p.title),
            Self::KnowledgeBaseEntry(k) => Some(&k.title),
            Self::FormTemplate(f) => Some(&f.name),
        }
    }

    /// Searchable description
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Service(s) => Some(&s.description),
            Self::Testimonial(t) => Some(&t.content),
            Self::BlogPost(p) => Some(&p.summary),
            Self::KnowledgeBaseEntry(k) => Some(&k.category),
            Self::FormTemplate(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePage {
    pub title: String,
    pub description: String,
    /// Free-form details (features, pricing, timeline)
    #[serde(default)]
    pub details: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub customer_name: String,
    pub rating: u8,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u64,
}

/// Tenant-scoped quote form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTemplate {
    pub name: String,
    pub fields: Vec<FormField>,
}

impl FormTemplate {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Known form field kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Select {
        options: Vec<String>,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

/// Filters for listing content documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentQuery {
    pub kind: Option<DocumentKind>,
    pub status: Option<DocumentStatus>,
    /// Case-insensitive substring match on title or description
    pub search: Option<String>,
}

// ===== Leads =====

/// Well-known lead statuses. Status stays an open string.
pub mod lead_status {
    pub const NEW: &str = "new";
    pub const CONTACTED: &str = "contacted";
    pub const WON: &str = "won";
    pub const LOST: &str = "lost";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    /// Priority from the quoted budget and timeline codes
    pub fn assess(budget_range: Option<&str>, timeline: Option<&str>) -> Self {
        match (budget_range, timeline) {
            (Some("30k-50k" | "over-50k"), _) | (_, Some("asap")) => Self::High,
            (Some("under-5k"), _) => Self::Low,
            _ => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// Raw key/value payload posted by the public quote form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadPayload {
    pub fields: BTreeMap<String, String>,
}

impl LeadPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LeadPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Prospect (lead) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prospect {
    pub id: Uuid,
    pub tenant_key: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub notes: Option<String>,
    /// Form fields beyond the core contact and project attributes
    pub details: BTreeMap<String, String>,
    pub status: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff triage change for a prospect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProspectUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
}

// ===== Chat and analytics =====

/// One logged chat widget exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub id: Uuid,
    pub tenant_key: String,
    pub session_id: String,
    pub user_message: String,
    pub response: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatStats {
    pub total: u64,
    pub this_week: u64,
    pub unique_sessions: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadStats {
    pub total: u64,
    pub high_priority: u64,
    pub won: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardAnalytics {
    pub chats: ChatStats,
    pub leads: LeadStats,
}
