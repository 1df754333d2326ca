mod common;

use common::*;
use tenant_sites::contract::*;
use tenant_sites::domain::repository::ContentRepository;
use tenant_sites::domain::service::default_quote_form;

async fn add(ctx: &TestContext, doc: ContentDocument) -> ContentDocument {
    ctx.content.insert(&doc).await.unwrap()
}

// ===== Tenant resolution =====

#[test]
fn test_resolve_known_www_and_unknown_hosts() {
    print_test_header(
        "test_resolve_known_www_and_unknown_hosts",
        "Registered hosts resolve, www. is ignored, unknown hosts get the default tenant",
    );
    let ctx = build_service();

    let bravo = ctx.service.resolve_tenant("bravoohio.org");
    assert_eq!(bravo.brand_key, "bravoohio");

    let www = ctx.service.resolve_tenant("www.bravoohio.org");
    assert_eq!(www, bravo);

    let fallback = ctx.service.resolve_tenant("unknown.example");
    assert_eq!(fallback.brand_key, "giorgiy");
    assert_eq!(fallback, ctx.service.registry().default_tenant());
    println!("✅ Resolution covers known, www and unknown hosts");
}

// ===== Content =====

#[tokio::test]
async fn test_documents_are_isolated_per_tenant() {
    print_test_header(
        "test_documents_are_isolated_per_tenant",
        "A tenant never sees another tenant's documents",
    );
    let ctx = build_service();
    add(&ctx, document("giorgiy", DocumentStatus::Published, service_body("Cabinets", "Kitchen"), 10)).await;
    let other = add(
        &ctx,
        document("lodexinc", DocumentStatus::Published, service_body("Strategy", "Corporate"), 5),
    )
    .await;

    let giorgiy = ctx
        .service
        .list_documents("giorgiy", &ContentQuery::default())
        .await
        .unwrap();
    assert_eq!(giorgiy.len(), 1);
    assert!(giorgiy.iter().all(|d| d.tenant_key == "giorgiy"));

    let cross = ctx.service.get_document("giorgiy", other.id).await.unwrap();
    assert!(cross.is_none(), "lookup by id must stay inside the tenant");

    let own = ctx.service.get_document("lodexinc", other.id).await.unwrap();
    assert_eq!(own.map(|d| d.id), Some(other.id));
    println!("✅ Tenant isolation holds for list and get");
}

#[tokio::test]
async fn test_list_documents_filters_and_orders_newest_first() {
    print_test_header(
        "test_list_documents_filters_and_orders_newest_first",
        "Type, status and search filters combine; results are newest first",
    );
    let ctx = build_service();
    let old = add(&ctx, document("giorgiy", DocumentStatus::Published, service_body("Old Cabinets", "oak"), 300)).await;
    let new = add(&ctx, document("giorgiy", DocumentStatus::Published, service_body("New Cabinets", "maple"), 10)).await;
    add(&ctx, document("giorgiy", DocumentStatus::Draft, service_body("Draft Cabinets", "pine"), 5)).await;
    add(
        &ctx,
        document(
            "giorgiy",
            DocumentStatus::Published,
            DocumentBody::Testimonial(Testimonial {
                customer_name: "Sarah".to_string(),
                rating: 5,
                content: "Great cabinets".to_string(),
                project_type: None,
            }),
            1,
        ),
    )
    .await;

    let query = ContentQuery {
        kind: Some(DocumentKind::Service),
        status: Some(DocumentStatus::Published),
        search: None,
    };
    let services = ctx.service.list_documents("giorgiy", &query).await.unwrap();
    let ids: Vec<_> = services.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);

    let search = ContentQuery {
        search: Some("MAPLE".to_string()),
        ..ContentQuery::default()
    };
    let found = ctx.service.list_documents("giorgiy", &search).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, new.id);
    println!("✅ Filters and ordering applied");
}

#[tokio::test]
async fn test_quote_form_prefers_newest_published_template() {
    print_test_header(
        "test_quote_form_prefers_newest_published_template",
        "The newest published template wins; drafts are ignored; no template falls back to the default",
    );
    let ctx = build_service();

    let fallback = ctx.service.quote_form("bravoohio").await.unwrap();
    assert_eq!(fallback, default_quote_form());

    let template = |name: &str| {
        DocumentBody::FormTemplate(FormTemplate {
            name: name.to_string(),
            fields: default_quote_form().fields,
        })
    };
    add(&ctx, document("bravoohio", DocumentStatus::Published, template("Older"), 100)).await;
    add(&ctx, document("bravoohio", DocumentStatus::Published, template("Newer"), 50)).await;
    add(&ctx, document("bravoohio", DocumentStatus::Draft, template("Unpublished"), 1)).await;

    let form = ctx.service.quote_form("bravoohio").await.unwrap();
    assert_eq!(form.name, "Newer");
    println!("✅ Template selection correct");
}

// ===== Leads =====

#[tokio::test]
async fn test_submit_valid_lead_is_stored_as_new() {
    print_test_header(
        "test_submit_valid_lead_is_stored_as_new",
        "A valid submission is stored under the tenant with status new and aliases normalized",
    );
    let ctx = build_service();

    let prospect = ctx
        .service
        .submit_prospect("bravoohio", valid_lead().with("room_dimensions", "12x15"))
        .await
        .unwrap();

    assert_eq!(prospect.tenant_key, "bravoohio");
    assert_eq!(prospect.status, lead_status::NEW);
    assert_eq!(prospect.project_type.as_deref(), Some("cabinets"));
    assert_eq!(prospect.budget_range.as_deref(), Some("15k-30k"));
    assert_eq!(prospect.priority, Priority::Normal);
    assert_eq!(prospect.details.get("room_dimensions").map(String::as_str), Some("12x15"));
    assert_eq!(ctx.prospects.count(), 1);

    let stored = ctx.service.get_prospect(prospect.id).await.unwrap();
    assert_eq!(stored, prospect);
    println!("✅ Lead stored: {}", prospect.id);
}

#[tokio::test]
async fn test_submit_assigns_priority_from_budget_and_timeline() {
    print_test_header(
        "test_submit_assigns_priority_from_budget_and_timeline",
        "Large budgets and asap timelines are high priority, small budgets low",
    );
    let ctx = build_service();

    let high = ctx
        .service
        .submit_prospect("giorgiy", valid_lead().with("budget", "over-50k"))
        .await
        .unwrap();
    let urgent = ctx
        .service
        .submit_prospect("giorgiy", valid_lead().with("timeline", "asap"))
        .await
        .unwrap();
    let low = ctx
        .service
        .submit_prospect("giorgiy", valid_lead().with("budget", "under-5k"))
        .await
        .unwrap();

    assert_eq!(high.priority, Priority::High);
    assert_eq!(urgent.priority, Priority::High);
    assert_eq!(low.priority, Priority::Low);
    println!("✅ Priorities assigned");
}

#[tokio::test]
async fn test_submit_invalid_lead_lists_every_problem() {
    print_test_header(
        "test_submit_invalid_lead_lists_every_problem",
        "Missing name and unusable contact details are reported together and nothing is stored",
    );
    let ctx = build_service();

    let payload = LeadPayload::new()
        .with("email", "not-an-email")
        .with("phone", "call me");
    let err = ctx.service.submit_prospect("giorgiy", payload).await.unwrap_err();

    match err {
        SitesError::InvalidLead { errors } => {
            assert_eq!(errors.len(), 2, "unexpected errors: {:?}", errors);
            assert!(errors.iter().any(|e| e.contains("name")));
            assert!(errors.iter().any(|e| e.contains("email address or phone")));
        }
        other => panic!("expected InvalidLead, got {:?}", other),
    }
    assert_eq!(ctx.prospects.count(), 0);
    println!("✅ Invalid lead rejected");
}

#[tokio::test]
async fn test_submit_accepts_one_valid_contact_channel() {
    print_test_header(
        "test_submit_accepts_one_valid_contact_channel",
        "A phone number alone is enough; a bad secondary email is kept",
    );
    let ctx = build_service();

    let payload = LeadPayload::new()
        .with("name", "Bob")
        .with("phone", "(216) 555-0100")
        .with("email", "bob-at-example");
    let prospect = ctx.service.submit_prospect("giorgiy", payload).await.unwrap();

    assert_eq!(prospect.phone.as_deref(), Some("(216) 555-0100"));
    assert_eq!(prospect.email.as_deref(), Some("bob-at-example"));
    println!("✅ Lead accepted with a single valid channel");
}

#[tokio::test]
async fn test_submit_fails_when_store_is_down() {
    print_test_header(
        "test_submit_fails_when_store_is_down",
        "A failing repository surfaces as an internal error",
    );
    let ctx = build_service();
    ctx.prospects.fail();

    let err = ctx.service.submit_prospect("giorgiy", valid_lead()).await.unwrap_err();
    assert_eq!(err, SitesError::Internal);

    let err = ctx.service.list_prospects(None).await.unwrap_err();
    assert_eq!(err, SitesError::Internal);
    println!("✅ Store failures mapped to Internal");
}

#[tokio::test]
async fn test_list_prospects_by_tenant() {
    print_test_header(
        "test_list_prospects_by_tenant",
        "Dashboard listing covers all tenants or one brand key",
    );
    let ctx = build_service();
    ctx.service.submit_prospect("giorgiy", valid_lead()).await.unwrap();
    ctx.service.submit_prospect("lodexinc", valid_lead()).await.unwrap();
    ctx.service.submit_prospect("lodexinc", valid_lead()).await.unwrap();

    assert_eq!(ctx.service.list_prospects(None).await.unwrap().len(), 3);

    let lodex = ctx.service.list_prospects(Some("lodexinc")).await.unwrap();
    assert_eq!(lodex.len(), 2);
    assert!(lodex.iter().all(|p| p.tenant_key == "lodexinc"));
    assert!(lodex.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    println!("✅ Prospect listing filtered");
}

#[tokio::test]
async fn test_update_prospect_status_and_notes() {
    print_test_header(
        "test_update_prospect_status_and_notes",
        "Status and notes changes persist; empty updates and unknown ids are rejected",
    );
    let ctx = build_service();
    let prospect = ctx.service.submit_prospect("giorgiy", valid_lead()).await.unwrap();

    let updated = ctx
        .service
        .update_prospect(
            prospect.id,
            ProspectUpdate {
                status: Some(lead_status::CONTACTED.to_string()),
                notes: Some("Left a voicemail".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, lead_status::CONTACTED);
    assert_eq!(updated.notes.as_deref(), Some("Left a voicemail"));
    assert!(updated.updated_at >= prospect.updated_at);

    let stored = ctx.service.get_prospect(prospect.id).await.unwrap();
    assert_eq!(stored.status, lead_status::CONTACTED);

    let empty = ctx
        .service
        .update_prospect(prospect.id, ProspectUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(empty, SitesError::Validation { .. }));

    let blank = ctx
        .service
        .update_prospect(
            prospect.id,
            ProspectUpdate {
                status: Some("   ".to_string()),
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(blank, SitesError::Validation { .. }));

    let missing = ctx
        .service
        .update_prospect(
            uuid::Uuid::new_v4(),
            ProspectUpdate {
                status: Some(lead_status::WON.to_string()),
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(missing, SitesError::NotFound { .. }));
    println!("✅ Prospect updates validated");
}

// ===== Chat and analytics =====

#[tokio::test]
async fn test_chat_replies_in_tenant_voice_and_logs_exchange() {
    print_test_header(
        "test_chat_replies_in_tenant_voice_and_logs_exchange",
        "Replies use the resolved tenant's details and every exchange is logged",
    );
    let ctx = build_service();

    let reply = ctx
        .service
        .chat("www.lodexinc.com", "What is your phone number?", Some("s-1"))
        .await
        .unwrap();
    assert!(reply.response.contains("216-268-2990"));
    assert!(reply.response.contains("Lodex Inc"));
    assert_eq!(reply.model, "simple");

    ctx.service.chat("lodexinc.com", "hello", None).await.unwrap();

    let log = ctx.chats.exchanges();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].tenant_key, "lodexinc");
    assert_eq!(log[0].session_id, "s-1");
    assert_eq!(log[1].session_id, "anonymous");
    println!("✅ Chat answered and logged");
}

#[tokio::test]
async fn test_chat_tolerates_log_failure_but_rejects_empty_message() {
    print_test_header(
        "test_chat_tolerates_log_failure_but_rejects_empty_message",
        "A failing chat log does not break the reply; blank messages are invalid",
    );
    let ctx = build_service();
    ctx.chats.fail();

    let reply = ctx.service.chat("giorgiy.org", "hi", None).await.unwrap();
    assert!(!reply.response.is_empty());

    let err = ctx.service.chat("giorgiy.org", "   ", None).await.unwrap_err();
    assert!(matches!(err, SitesError::Validation { .. }));
    println!("✅ Chat is resilient");
}

#[tokio::test]
async fn test_dashboard_analytics_counts_chats_and_leads() {
    print_test_header(
        "test_dashboard_analytics_counts_chats_and_leads",
        "Analytics report chat totals, unique sessions, high-priority and won leads",
    );
    let ctx = build_service();
    ctx.service.chat("giorgiy.org", "hi", Some("a")).await.unwrap();
    ctx.service.chat("giorgiy.org", "services?", Some("a")).await.unwrap();
    ctx.service.chat("giorgiy.org", "hours?", Some("b")).await.unwrap();

    let high = ctx
        .service
        .submit_prospect("giorgiy", valid_lead().with("timeline", "asap"))
        .await
        .unwrap();
    ctx.service.submit_prospect("giorgiy", valid_lead()).await.unwrap();
    ctx.service
        .update_prospect(
            high.id,
            ProspectUpdate {
                status: Some(lead_status::WON.to_string()),
                notes: None,
            },
        )
        .await
        .unwrap();

    let analytics = ctx.service.dashboard_analytics().await.unwrap();
    assert_eq!(analytics.chats.total, 3);
    assert_eq!(analytics.chats.this_week, 3);
    assert_eq!(analytics.chats.unique_sessions, 2);
    assert_eq!(analytics.leads.total, 2);
    assert_eq!(analytics.leads.high_priority, 1);
    assert_eq!(analytics.leads.won, 1);
    println!("✅ Analytics: {:?}", analytics);
}

#[tokio::test]
async fn test_business_status_per_tenant_hours() {
    print_test_header(
        "test_business_status_per_tenant_hours",
        "Each host is judged against its own tenant's weekly hours",
    );
    let ctx = build_service();
    // Saturday 10:00 at UTC-05:00
    let saturday = chrono::DateTime::parse_from_rfc3339("2025-01-11T15:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    let giorgiy = ctx.service.business_status("www.giorgiy.org", saturday);
    assert!(giorgiy.is_open);
    assert_eq!(giorgiy.current_day, "Saturday");

    let lodex = ctx.service.business_status("lodexinc.com", saturday);
    assert!(!lodex.is_open);
    assert_eq!(lodex.message, "We're Currently Closed. Call 216-268-2990 to leave a message");

    let unknown = ctx.service.business_status("unknown.test", saturday);
    assert_eq!(unknown, giorgiy);
    println!("✅ Business status per tenant");
}
