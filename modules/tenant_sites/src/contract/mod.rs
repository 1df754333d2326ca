//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SitesApi;
pub use error::{ConfigurationError, SitesError};
pub use model::{
    lead_status, BlogPost, BrandAssets, BusinessHours, BusinessStatus, ChatExchange, ChatReply,
    ChatStats, ColorScheme, ContentDocument, ContentQuery, DashboardAnalytics, DocumentBody,
    DocumentKind, DocumentStatus, FieldKind, FormField, FormTemplate, KnowledgeBaseEntry,
    LeadPayload, LeadStats, OpeningWindow, Priority, Prospect, ProspectUpdate, SeoMeta,
    ServiceOffering, ServicePage, TenantProfile, Testimonial,
};
