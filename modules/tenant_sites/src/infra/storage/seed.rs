//! Sample content inserted into an empty content table

use crate::contract::{
    ContentDocument, DocumentBody, DocumentStatus, FieldKind, FormField, FormTemplate,
    KnowledgeBaseEntry, SeoMeta, ServicePage, Testimonial,
};
use crate::domain::registry::TenantRegistry;
use crate::domain::repository::ContentRepository;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use uuid::Uuid;

fn select(name: &str, options: &[&str]) -> FormField {
    FormField {
        name: name.to_string(),
        kind: FieldKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    }
}

fn text(name: &str, placeholder: &str) -> FormField {
    FormField {
        name: name.to_string(),
        kind: FieldKind::Text {
            placeholder: Some(placeholder.to_string()),
        },
    }
}

fn textarea(name: &str, placeholder: &str) -> FormField {
    FormField {
        name: name.to_string(),
        kind: FieldKind::Textarea {
            placeholder: Some(placeholder.to_string()),
        },
    }
}

fn service(title: &str, description: &str, details: serde_json::Value) -> DocumentBody {
    DocumentBody::Service(ServicePage {
        title: title.to_string(),
        description: description.to_string(),
        details,
        seo: None,
    })
}

/// Sample documents per brand key; later entries are newer
pub fn sample_documents(now: DateTime<Utc>) -> Vec<ContentDocument> {
    let bodies: Vec<(&str, DocumentBody)> = vec![
        (
            "giorgiy",
            DocumentBody::Service(ServicePage {
                title: "Custom Kitchen Cabinets".to_string(),
                description: "Premium handcrafted kitchen cabinets made to your exact specifications"
                    .to_string(),
                details: json!({
                    "features": ["Soft-close hinges", "Full extension drawers", "Custom wood species"],
                    "pricing": { "starting_price": 15000, "price_range": "15k-50k" },
                    "timeline": "4-8 weeks"
                }),
                seo: Some(SeoMeta {
                    meta_title: "Custom Kitchen Cabinets Cleveland Ohio | LZ Custom".to_string(),
                    meta_description:
                        "Professional custom kitchen cabinet fabrication in Cleveland Ohio"
                            .to_string(),
                }),
            }),
        ),
        (
            "giorgiy",
            DocumentBody::Testimonial(Testimonial {
                customer_name: "Sarah Johnson".to_string(),
                rating: 5,
                content: "LZ Custom did an amazing job on our kitchen renovation. The quality is outstanding!"
                    .to_string(),
                project_type: Some("cabinets".to_string()),
            }),
        ),
        (
            "giorgiy",
            DocumentBody::KnowledgeBaseEntry(KnowledgeBaseEntry {
                category: "Cabinet Care".to_string(),
                title: "How to Maintain Your Custom Cabinets".to_string(),
                content: "Regular cleaning with appropriate products will keep your cabinets looking new..."
                    .to_string(),
                tags: vec!["maintenance".into(), "care".into(), "cabinets".into()],
                views: 0,
            }),
        ),
        (
            "giorgiy",
            DocumentBody::FormTemplate(FormTemplate {
                name: "Kitchen Cabinet Quote".to_string(),
                fields: vec![
                    text("name", "Full name"),
                    text("email", "Email address"),
                    text("phone", "Phone number"),
                    select("project_type", &["cabinets", "countertops", "tile", "painting", "other"]),
                    select(
                        "budget_range",
                        &["under-5k", "5k-15k", "15k-30k", "30k-50k", "over-50k"],
                    ),
                    select("timeline", &["asap", "1-month", "3-months", "6-months", "flexible"]),
                    text("room_dimensions", "e.g., 12x15 feet"),
                    textarea("special_requirements", "Any special requirements..."),
                ],
            }),
        ),
        (
            "giorgiy-shepov",
            service(
                "Business Digital Transformation",
                "Strategic guidance for modernizing your business operations",
                json!({
                    "approach": ["Assessment", "Strategy", "Implementation", "Optimization"],
                    "industries": ["Manufacturing", "Healthcare", "Professional Services"],
                    "pricing": { "consultation_fee": 250, "project_range": "5k-25k" }
                }),
            ),
        ),
        (
            "giorgiy-shepov",
            DocumentBody::KnowledgeBaseEntry(KnowledgeBaseEntry {
                category: "Digital Transformation".to_string(),
                title: "Common Digital Transformation Pitfalls".to_string(),
                content: "Many businesses make these mistakes when undergoing digital transformation..."
                    .to_string(),
                tags: vec![
                    "digital transformation".into(),
                    "strategy".into(),
                    "best practices".into(),
                ],
                views: 0,
            }),
        ),
        (
            "giorgiy-shepov",
            DocumentBody::FormTemplate(FormTemplate {
                name: "Consulting Inquiry".to_string(),
                fields: vec![
                    text("name", "Full name"),
                    text("email", "Email address"),
                    text("phone", "Phone number"),
                    select("company_size", &["1-10", "11-50", "51-200", "200+"]),
                    select(
                        "industry",
                        &["Technology", "Healthcare", "Manufacturing", "Other"],
                    ),
                    select("budget_range", &["under-5k", "5k-15k", "15k-30k", "30k-50k", "over-50k"]),
                    textarea("project_description", "Describe your project..."),
                ],
            }),
        ),
        (
            "bravoohio",
            service(
                "Market Analysis & Growth Strategy",
                "Comprehensive market research and strategic growth planning",
                json!({
                    "methodology": ["Market research", "Competitive analysis", "Growth planning"],
                    "timeline": "2-6 weeks",
                    "pricing": { "starting_price": 3000, "price_range": "3k-15k" }
                }),
            ),
        ),
        (
            "lodexinc",
            service(
                "Corporate Development Strategy",
                "Enterprise-level strategic planning and development services",
                json!({
                    "focus_areas": ["Mergers & Acquisitions", "Strategic Partnerships", "Market Expansion"],
                    "engagement_models": ["Retainer", "Project-based", "Advisory"],
                    "pricing": { "retainer_min": 10000, "project_range": "25k-100k+" }
                }),
            ),
        ),
    ];

    let count = bodies.len() as i64;
    bodies
        .into_iter()
        .enumerate()
        .map(|(i, (tenant_key, body))| {
            let created_at = now - Duration::seconds(count - i as i64);
            ContentDocument {
                id: Uuid::new_v4(),
                tenant_key: tenant_key.to_string(),
                status: DocumentStatus::Published,
                body,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

/// Insert the sample documents of registered tenants when no content exists yet
pub async fn seed_if_empty(repo: &dyn ContentRepository, registry: &TenantRegistry) -> Result<usize> {
    if repo.count().await? > 0 {
        return Ok(0);
    }

    let (documents, skipped): (Vec<_>, Vec<_>) = sample_documents(Utc::now())
        .into_iter()
        .partition(|doc| registry.by_brand_key(&doc.tenant_key).is_some());
    if !skipped.is_empty() {
        tracing::debug!(skipped = skipped.len(), "Skipping samples of unregistered tenants");
    }
    for document in &documents {
        repo.insert(document).await?;
    }

    tracing::info!(documents = documents.len(), "Seeded sample content");
    Ok(documents.len())
}
