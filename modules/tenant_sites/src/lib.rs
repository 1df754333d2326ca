//! Tenant Sites
//!
//! One backend serving several branded marketing sites. The request host
//! picks the tenant; content, quote form leads and chat are partitioned by
//! the tenant's brand key. The `frontend` module holds the HTTP-facing
//! client logic of the quote form and the admin dashboard.

// Public exports
pub mod contract;
pub use contract::{
    client::SitesApi, error::ConfigurationError, error::SitesError, ContentDocument,
    DocumentBody, FormTemplate, LeadPayload, Prospect, TenantProfile,
};

pub mod config;
pub mod frontend;
pub mod module;
pub use module::SitesModule;

pub mod api;
pub mod domain;
pub mod infra;
