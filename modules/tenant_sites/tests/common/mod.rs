//! Common test utilities: in-memory repositories and service builders

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tenant_sites::config::Config;
use tenant_sites::contract::*;
use tenant_sites::domain::repository::{ChatLogRepository, ContentRepository, ProspectRepository};
use tenant_sites::domain::validation::PayloadLimits;
use tenant_sites::domain::{Service, TenantRegistry};
use tenant_sites::SitesModule;
use uuid::Uuid;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

// ===== Mock repositories =====

#[derive(Clone, Default)]
pub struct MockContentRepo {
    data: Arc<RwLock<Vec<ContentDocument>>>,
}

impl MockContentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }
}

fn matches_search(doc: &ContentDocument, term: &str) -> bool {
    let term = term.to_lowercase();
    [doc.body.title(), doc.body.description()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

#[async_trait]
impl ContentRepository for MockContentRepo {
    async fn find(&self, tenant_key: &str, query: &ContentQuery) -> anyhow::Result<Vec<ContentDocument>> {
        let mut results: Vec<ContentDocument> = self
            .data
            .read()
            .iter()
            .filter(|d| d.tenant_key == tenant_key)
            .filter(|d| query.kind.map_or(true, |k| d.kind() == k))
            .filter(|d| query.status.map_or(true, |s| d.status == s))
            .filter(|d| query.search.as_deref().map_or(true, |t| matches_search(d, t)))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }

    async fn find_by_id(&self, tenant_key: &str, id: Uuid) -> anyhow::Result<Option<ContentDocument>> {
        Ok(self
            .data
            .read()
            .iter()
            .find(|d| d.id == id && d.tenant_key == tenant_key)
            .cloned())
    }

    async fn insert(&self, document: &ContentDocument) -> anyhow::Result<ContentDocument> {
        self.data.write().push(document.clone());
        Ok(document.clone())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().len() as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockProspectRepo {
    data: Arc<RwLock<HashMap<Uuid, Prospect>>>,
    failing: Arc<AtomicBool>,
}

impl MockProspectRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail like an unreachable store
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl ProspectRepository for MockProspectRepo {
    async fn insert(&self, prospect: &Prospect) -> anyhow::Result<Prospect> {
        self.check()?;
        self.data.write().insert(prospect.id, prospect.clone());
        Ok(prospect.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Prospect>> {
        self.check()?;
        Ok(self.data.read().get(&id).cloned())
    }

    async fn list(&self, tenant_key: Option<&str>) -> anyhow::Result<Vec<Prospect>> {
        self.check()?;
        let mut results: Vec<Prospect> = self
            .data
            .read()
            .values()
            .filter(|p| tenant_key.map_or(true, |key| p.tenant_key == key))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }

    async fn update(&self, prospect: &Prospect) -> anyhow::Result<Prospect> {
        self.check()?;
        let mut data = self.data.write();
        match data.get_mut(&prospect.id) {
            Some(existing) => {
                *existing = prospect.clone();
                Ok(prospect.clone())
            }
            None => anyhow::bail!("prospect {} not found", prospect.id),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockChatLogRepo {
    data: Arc<RwLock<Vec<ChatExchange>>>,
    failing: Arc<AtomicBool>,
}

impl MockChatLogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn exchanges(&self) -> Vec<ChatExchange> {
        self.data.read().clone()
    }
}

#[async_trait]
impl ChatLogRepository for MockChatLogRepo {
    async fn append(&self, exchange: &ChatExchange) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("chat log unavailable");
        }
        self.data.write().push(exchange.clone());
        Ok(())
    }

    async fn stats(&self, since: DateTime<Utc>) -> anyhow::Result<ChatStats> {
        let data = self.data.read();
        let sessions: HashSet<&str> = data.iter().map(|e| e.session_id.as_str()).collect();
        Ok(ChatStats {
            total: data.len() as u64,
            this_week: data.iter().filter(|e| e.created_at >= since).count() as u64,
            unique_sessions: sessions.len() as u64,
        })
    }
}

// ===== Builders =====

pub struct TestContext {
    pub service: Arc<Service>,
    pub content: MockContentRepo,
    pub prospects: MockProspectRepo,
    pub chats: MockChatLogRepo,
}

pub fn build_service() -> TestContext {
    let registry = TenantRegistry::builtin().unwrap();
    let content = MockContentRepo::new();
    let prospects = MockProspectRepo::new();
    let chats = MockChatLogRepo::new();

    let service = Arc::new(Service::new(
        Arc::new(registry),
        Arc::new(content.clone()),
        Arc::new(prospects.clone()),
        Arc::new(chats.clone()),
        PayloadLimits::default(),
    ));

    TestContext {
        service,
        content,
        prospects,
        chats,
    }
}

pub fn document(tenant_key: &str, status: DocumentStatus, body: DocumentBody, age_secs: i64) -> ContentDocument {
    let created_at = Utc::now() - chrono::Duration::seconds(age_secs);
    ContentDocument {
        id: Uuid::new_v4(),
        tenant_key: tenant_key.to_string(),
        status,
        body,
        created_at,
        updated_at: created_at,
    }
}

pub fn service_body(title: &str, description: &str) -> DocumentBody {
    DocumentBody::Service(ServicePage {
        title: title.to_string(),
        description: description.to_string(),
        details: serde_json::Value::Null,
        seo: None,
    })
}

pub fn valid_lead() -> LeadPayload {
    LeadPayload::new()
        .with("name", "Jane Doe")
        .with("email", "jane@example.com")
        .with("phone", "216-555-0100")
        .with("project", "cabinets")
        .with("budget", "15k-30k")
        .with("timeline", "3-months")
        .with("message", "Kitchen remodel")
}

// ===== SQLite-backed module =====

/// Private in-memory SQLite database; one connection keeps it alive
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

pub async fn sqlite_module(seed: bool) -> SitesModule {
    let config = Config {
        seed_sample_content: seed,
        ..Config::default()
    };
    SitesModule::init(config, memory_db().await).await.unwrap()
}

/// Serve a router on an ephemeral local port
pub async fn serve(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Address nothing listens on
pub async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
