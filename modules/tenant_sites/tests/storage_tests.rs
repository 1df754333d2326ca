mod common;

use common::*;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tenant_sites::contract::*;
use tenant_sites::domain::TenantRegistry;
use tenant_sites::domain::repository::{ChatLogRepository, ContentRepository, ProspectRepository};
use tenant_sites::infra::storage::{
    migrations::Migrator, seed, SeaOrmChatLogRepository, SeaOrmContentRepository,
    SeaOrmProspectRepository,
};

async fn migrated() -> Arc<sea_orm::DatabaseConnection> {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

#[tokio::test]
async fn test_migrations_apply_once_on_fresh_database() {
    print_test_header(
        "test_migrations_apply_once_on_fresh_database",
        "Every migration is recorded under its own name and a second run is a no-op",
    );
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    let names: Vec<String> = applied.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(
        names,
        vec![
            "m20250105_000001_create_content_documents",
            "m20250105_000002_create_prospects",
            "m20250105_000003_create_chat_conversations",
        ]
    );

    Migrator::up(&db, None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    println!("✅ Applied {} migrations", names.len());
}

#[tokio::test]
async fn test_module_seeds_sample_content_per_tenant() {
    print_test_header(
        "test_module_seeds_sample_content_per_tenant",
        "Module init migrates, seeds sample documents and serves them per tenant",
    );
    let module = sqlite_module(true).await;
    let service = module.service();

    let giorgiy = service
        .list_documents("giorgiy", &ContentQuery::default())
        .await
        .unwrap();
    assert_eq!(giorgiy.len(), 4);
    assert!(giorgiy.iter().all(|d| d.tenant_key == "giorgiy"));
    assert!(giorgiy.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let form = service.quote_form("giorgiy").await.unwrap();
    assert_eq!(form.name, "Kitchen Cabinet Quote");
    assert!(form.field("room_dimensions").is_some());

    let consulting = service.quote_form("giorgiy-shepov").await.unwrap();
    assert_eq!(consulting.name, "Consulting Inquiry");
    println!("✅ Seeded {} documents for giorgiy", giorgiy.len());
}

#[tokio::test]
async fn test_seed_runs_only_on_empty_store() {
    print_test_header("test_seed_runs_only_on_empty_store", "Seeding is skipped once content exists");
    let db = migrated().await;
    let repo = SeaOrmContentRepository::new(db);

    let registry = TenantRegistry::builtin().unwrap();

    let first = seed::seed_if_empty(&repo, &registry).await.unwrap();
    assert!(first > 0);
    assert_eq!(seed::seed_if_empty(&repo, &registry).await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), first as u64);
    println!("✅ Seed is idempotent");
}

#[tokio::test]
async fn test_seed_skips_tenants_missing_from_registry() {
    print_test_header(
        "test_seed_skips_tenants_missing_from_registry",
        "Only samples of tenants in the loaded registry are inserted",
    );
    let db = migrated().await;
    let repo = SeaOrmContentRepository::new(db);
    let lodex_only = TenantRegistry::new(
        TenantRegistry::builtin()
            .unwrap()
            .tenants()
            .iter()
            .filter(|t| t.brand_key == "lodexinc")
            .cloned()
            .collect(),
    )
    .unwrap();

    let inserted = seed::seed_if_empty(&repo, &lodex_only).await.unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(repo.find("lodexinc", &ContentQuery::default()).await.unwrap().len(), 1);
    assert!(repo.find("giorgiy", &ContentQuery::default()).await.unwrap().is_empty());
    println!("✅ Seeded {} document for the single registered tenant", inserted);
}

#[tokio::test]
async fn test_content_search_is_case_insensitive_and_tenant_scoped() {
    print_test_header(
        "test_content_search_is_case_insensitive_and_tenant_scoped",
        "Search matches title or description regardless of case, inside one tenant",
    );
    let db = migrated().await;
    let repo = SeaOrmContentRepository::new(db);
    let kitchen = document("giorgiy", DocumentStatus::Published, service_body("Kitchen Cabinets", "Oak and maple"), 20);
    let bath = document("giorgiy", DocumentStatus::Draft, service_body("Bath Vanities", "Custom MAPLE vanities"), 10);
    let foreign = document("lodexinc", DocumentStatus::Published, service_body("Maple Strategy", "corporate"), 5);
    for doc in [&kitchen, &bath, &foreign] {
        repo.insert(doc).await.unwrap();
    }

    let search = ContentQuery {
        search: Some("Maple".to_string()),
        ..ContentQuery::default()
    };
    let found = repo.find("giorgiy", &search).await.unwrap();
    let ids: Vec<_> = found.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![bath.id, kitchen.id]);

    let published = ContentQuery {
        status: Some(DocumentStatus::Published),
        ..search
    };
    let found = repo.find("giorgiy", &published).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, kitchen.id);
    assert_eq!(found[0].body, kitchen.body);

    assert!(repo.find_by_id("giorgiy", foreign.id).await.unwrap().is_none());
    let own = repo.find_by_id("lodexinc", foreign.id).await.unwrap();
    assert_eq!(own.map(|d| d.tenant_key), Some("lodexinc".to_string()));
    println!("✅ Search and isolation hold in SQL");
}

#[tokio::test]
async fn test_content_search_treats_wildcards_literally() {
    print_test_header(
        "test_content_search_treats_wildcards_literally",
        "Percent, underscore and backslash in a search term only match themselves",
    );
    let db = migrated().await;
    let repo = SeaOrmContentRepository::new(db);
    let kitchen = document("giorgiy", DocumentStatus::Published, service_body("Kitchen Cabinets", "Oak"), 20);
    let discount = document("giorgiy", DocumentStatus::Published, service_body("Spring Sale", "10% off walnut_oak"), 10);
    let path = document("giorgiy", DocumentStatus::Published, service_body("Drawings", r"C:\plans"), 5);
    for doc in [&kitchen, &discount, &path] {
        repo.insert(doc).await.unwrap();
    }

    let search = |term: &str| ContentQuery {
        search: Some(term.to_string()),
        ..ContentQuery::default()
    };
    let ids = |docs: Vec<ContentDocument>| docs.into_iter().map(|d| d.id).collect::<Vec<_>>();

    assert_eq!(ids(repo.find("giorgiy", &search("_")).await.unwrap()), vec![discount.id]);
    assert_eq!(ids(repo.find("giorgiy", &search("%")).await.unwrap()), vec![discount.id]);
    assert!(repo.find("giorgiy", &search("K_tchen")).await.unwrap().is_empty());
    assert!(repo.find("giorgiy", &search("Kit%ets")).await.unwrap().is_empty());
    assert_eq!(ids(repo.find("giorgiy", &search("10% OFF")).await.unwrap()), vec![discount.id]);
    assert_eq!(ids(repo.find("giorgiy", &search(r"c:\")).await.unwrap()), vec![path.id]);
    println!("✅ Wildcards matched literally");
}

#[tokio::test]
async fn test_prospect_round_trip_with_details() {
    print_test_header(
        "test_prospect_round_trip_with_details",
        "Prospects keep their details map, priority and notes through the store",
    );
    let module = sqlite_module(false).await;
    let service = module.service();

    let prospect = service
        .submit_prospect(
            "giorgiy",
            valid_lead()
                .with("budget", "30k-50k")
                .with("room_dimensions", "12x15 feet"),
        )
        .await
        .unwrap();
    assert_eq!(prospect.priority, Priority::High);

    let stored = service.get_prospect(prospect.id).await.unwrap();
    assert_eq!(stored.details.get("room_dimensions").map(String::as_str), Some("12x15 feet"));
    assert_eq!(stored.priority, Priority::High);
    assert_eq!(stored.status, lead_status::NEW);

    let updated = service
        .update_prospect(
            prospect.id,
            ProspectUpdate {
                status: None,
                notes: Some("Measure on Friday".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, lead_status::NEW);

    let listed = service.list_prospects(Some("giorgiy")).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notes.as_deref(), Some("Measure on Friday"));
    assert!(service.list_prospects(Some("bravoohio")).await.unwrap().is_empty());
    println!("✅ Prospect persisted");
}

#[tokio::test]
async fn test_prospects_listed_newest_first() {
    print_test_header("test_prospects_listed_newest_first", "Prospect listing orders by creation time");
    let db = migrated().await;
    let repo = SeaOrmProspectRepository::new(db);
    let ctx = build_service();

    let mut ids = Vec::new();
    for age in [300, 100, 200] {
        let mut prospect = ctx.service.submit_prospect("giorgiy", valid_lead()).await.unwrap();
        prospect.created_at = chrono::Utc::now() - chrono::Duration::seconds(age);
        repo.insert(&prospect).await.unwrap();
        ids.push((age, prospect.id));
    }
    ids.sort_by_key(|(age, _)| *age);

    let listed: Vec<_> = repo.list(None).await.unwrap().into_iter().map(|p| p.id).collect();
    let expected: Vec<_> = ids.into_iter().map(|(_, id)| id).collect();
    assert_eq!(listed, expected);
    println!("✅ Ordering verified");
}

#[tokio::test]
async fn test_chat_stats_count_sessions_and_week() {
    print_test_header(
        "test_chat_stats_count_sessions_and_week",
        "Chat stats count all exchanges, this week's and distinct sessions",
    );
    let db = migrated().await;
    let repo = SeaOrmChatLogRepository::new(db);
    let now = chrono::Utc::now();

    let exchange = |session: &str, age_days: i64| ChatExchange {
        id: uuid::Uuid::new_v4(),
        tenant_key: "giorgiy".to_string(),
        session_id: session.to_string(),
        user_message: "hi".to_string(),
        response: "Hello!".to_string(),
        model: "simple".to_string(),
        created_at: now - chrono::Duration::days(age_days),
    };
    repo.append(&exchange("a", 0)).await.unwrap();
    repo.append(&exchange("a", 1)).await.unwrap();
    repo.append(&exchange("b", 30)).await.unwrap();

    let stats = repo.stats(now - chrono::Duration::days(7)).await.unwrap();
    assert_eq!(
        stats,
        ChatStats {
            total: 3,
            this_week: 2,
            unique_sessions: 2,
        }
    );
    println!("✅ Chat stats: {:?}", stats);
}

#[tokio::test]
async fn test_native_client_serves_other_modules() {
    print_test_header(
        "test_native_client_serves_other_modules",
        "The in-process client exposes the same operations as the service",
    );
    let module = sqlite_module(true).await;
    let client: Arc<dyn SitesApi> = module.native_client();

    let profile = client.resolve_tenant("www.lodexinc.com");
    assert_eq!(profile.brand_key, "lodexinc");

    let docs = client
        .list_documents(&profile.brand_key, &ContentQuery::default())
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    let doc = client.get_document("lodexinc", docs[0].id).await.unwrap();
    assert_eq!(doc.map(|d| d.kind()), Some(DocumentKind::Service));

    let prospect = client.submit_prospect("lodexinc", valid_lead()).await.unwrap();
    let updated = client
        .update_prospect(
            prospect.id,
            ProspectUpdate {
                status: Some(lead_status::LOST.to_string()),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, lead_status::LOST);
    assert_eq!(client.list_prospects(Some("lodexinc")).await.unwrap().len(), 1);

    let analytics = client.dashboard_analytics().await.unwrap();
    assert_eq!(analytics.leads.total, 1);
    assert_eq!(client.quote_form("lodexinc").await.unwrap().name, "Request a Quote");
    println!("✅ Native client works");
}
