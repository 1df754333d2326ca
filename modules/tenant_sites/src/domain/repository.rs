//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{ChatExchange, ChatStats, ContentDocument, ContentQuery, Prospect};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository for tenant content documents
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Documents of one tenant matching the query, newest first
    async fn find(&self, tenant_key: &str, query: &ContentQuery) -> Result<Vec<ContentDocument>>;

    /// Find a document by id within one tenant partition
    async fn find_by_id(&self, tenant_key: &str, id: Uuid) -> Result<Option<ContentDocument>>;

    async fn insert(&self, document: &ContentDocument) -> Result<ContentDocument>;

    /// Number of stored documents across all tenants
    async fn count(&self) -> Result<u64>;
}

/// Repository for prospects
#[async_trait]
pub trait ProspectRepository: Send + Sync {
    async fn insert(&self, prospect: &Prospect) -> Result<Prospect>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prospect>>;

    /// List prospects newest first, optionally for one tenant
    async fn list(&self, tenant_key: Option<&str>) -> Result<Vec<Prospect>>;

    /// Replace the mutable fields of an existing prospect
    async fn update(&self, prospect: &Prospect) -> Result<Prospect>;
}

/// Repository for chat widget exchanges
#[async_trait]
pub trait ChatLogRepository: Send + Sync {
    async fn append(&self, exchange: &ChatExchange) -> Result<()>;

    /// Totals over all exchanges; `this_week` counts those created at or after `since`
    async fn stats(&self, since: DateTime<Utc>) -> Result<ChatStats>;
}
