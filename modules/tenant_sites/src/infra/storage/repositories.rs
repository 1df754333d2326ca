//! SeaORM repository implementations

use crate::contract::{ChatExchange, ChatStats, ContentDocument, ContentQuery, Prospect};
use crate::domain::repository::{ChatLogRepository, ContentRepository, ProspectRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity::{chat_log, content_document, prospect};

// ===== Content Repository =====

pub struct SeaOrmContentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmContentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%term%` with LIKE wildcards in the term matched literally
fn contains_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// Case-insensitive substring match on title or description
fn search_condition(term: &str) -> Condition {
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                content_document::Entity,
                content_document::Column::Title,
            ))))
            .like(contains_pattern(term)),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                content_document::Entity,
                content_document::Column::Description,
            ))))
            .like(contains_pattern(term)),
        )
}

#[async_trait]
impl ContentRepository for SeaOrmContentRepository {
    async fn find(&self, tenant_key: &str, query: &ContentQuery) -> Result<Vec<ContentDocument>> {
        let mut select = content_document::Entity::find()
            .filter(content_document::Column::TenantKey.eq(tenant_key));

        if let Some(kind) = query.kind {
            select = select.filter(content_document::Column::DocType.eq(kind.as_str()));
        }
        if let Some(status) = query.status {
            select = select.filter(content_document::Column::Status.eq(status.as_str()));
        }
        if let Some(term) = query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            select = select.filter(search_condition(term));
        }

        let results = select
            .order_by_desc(content_document::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        results.into_iter().map(ContentDocument::try_from).collect()
    }

    async fn find_by_id(&self, tenant_key: &str, id: Uuid) -> Result<Option<ContentDocument>> {
        let result = content_document::Entity::find_by_id(id)
            .filter(content_document::Column::TenantKey.eq(tenant_key))
            .one(&*self.db)
            .await?;

        result.map(ContentDocument::try_from).transpose()
    }

    async fn insert(&self, document: &ContentDocument) -> Result<ContentDocument> {
        let active = content_document::ActiveModel::try_from(document)?;
        let stored = content_document::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        ContentDocument::try_from(stored)
    }

    async fn count(&self) -> Result<u64> {
        Ok(content_document::Entity::find().count(&*self.db).await?)
    }
}

// ===== Prospect Repository =====

pub struct SeaOrmProspectRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProspectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProspectRepository for SeaOrmProspectRepository {
    async fn insert(&self, prospect: &Prospect) -> Result<Prospect> {
        let active = prospect::ActiveModel::try_from(prospect)?;
        let stored = prospect::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Prospect::try_from(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prospect>> {
        let result = prospect::Entity::find_by_id(id).one(&*self.db).await?;
        result.map(Prospect::try_from).transpose()
    }

    async fn list(&self, tenant_key: Option<&str>) -> Result<Vec<Prospect>> {
        let mut select = prospect::Entity::find();
        if let Some(key) = tenant_key {
            select = select.filter(prospect::Column::TenantKey.eq(key));
        }

        let results = select
            .order_by_desc(prospect::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Prospect::try_from).collect()
    }

    async fn update(&self, prospect: &Prospect) -> Result<Prospect> {
        let active = prospect::ActiveModel::try_from(prospect)?;
        let updated = prospect::Entity::update(active).exec(&*self.db).await?;
        Prospect::try_from(updated)
    }
}

// ===== Chat Log Repository =====

pub struct SeaOrmChatLogRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmChatLogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatLogRepository for SeaOrmChatLogRepository {
    async fn append(&self, exchange: &ChatExchange) -> Result<()> {
        let active: chat_log::ActiveModel = exchange.into();
        chat_log::Entity::insert(active).exec(&*self.db).await?;
        Ok(())
    }

    async fn stats(&self, since: DateTime<Utc>) -> Result<ChatStats> {
        let total = chat_log::Entity::find().count(&*self.db).await?;
        let this_week = chat_log::Entity::find()
            .filter(chat_log::Column::CreatedAt.gte(since))
            .count(&*self.db)
            .await?;
        let sessions: Option<i64> = chat_log::Entity::find()
            .select_only()
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col(chat_log::Column::SessionId))),
                "sessions",
            )
            .into_tuple()
            .one(&*self.db)
            .await?;

        Ok(ChatStats {
            total,
            this_week,
            unique_sessions: sessions.map_or(0, |n| n.max(0) as u64),
        })
    }
}
