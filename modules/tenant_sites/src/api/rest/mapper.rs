//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, FieldKind, SitesError};
use std::collections::BTreeMap;

// ===== Branding conversions =====

impl From<&contract::TenantProfile> for BrandingDto {
    fn from(profile: &contract::TenantProfile) -> Self {
        Self {
            hostname: profile.hostname.clone(),
            brand_key: profile.brand_key.clone(),
            company_name: profile.company_name.clone(),
            tagline: profile.tagline.clone(),
            specialty: profile.specialty.clone(),
            location: profile.location.clone(),
            phone: profile.phone.clone(),
            colors: ColorSchemeDto {
                primary: profile.colors.primary.clone(),
                secondary: profile.colors.secondary.clone(),
                accent: profile.colors.accent.clone(),
            },
            assets: BrandAssetsDto {
                logo: profile.assets.logo.clone(),
                hero_image: profile.assets.hero_image.clone(),
            },
            services: profile
                .services
                .iter()
                .map(|s| ServiceOfferingDto {
                    name: s.name.clone(),
                    icon: s.icon.clone(),
                    description: s.description.clone(),
                })
                .collect(),
            hours: profile.hours.summary.clone(),
        }
    }
}

impl From<contract::BusinessStatus> for BusinessStatusDto {
    fn from(status: contract::BusinessStatus) -> Self {
        Self {
            status: if status.is_open { "open" } else { "closed" }.to_string(),
            message: status.message,
            hours_today: status.hours,
            current_day: status.current_day,
        }
    }
}

// ===== Content conversions =====

impl From<contract::ContentDocument> for ContentDocumentDto {
    fn from(doc: contract::ContentDocument) -> Self {
        let body = serde_json::to_value(&doc.body).unwrap_or(serde_json::Value::Null);
        Self {
            id: doc.id,
            tenant_key: doc.tenant_key.clone(),
            doc_type: doc.kind().as_str().to_string(),
            status: doc.status.as_str().to_string(),
            title: doc.body.title().map(str::to_string),
            body,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<contract::FormTemplate> for FormTemplateDto {
    fn from(template: contract::FormTemplate) -> Self {
        Self {
            name: template.name,
            fields: template
                .fields
                .into_iter()
                .map(|field| {
                    let (field_type, options, placeholder) = match field.kind {
                        FieldKind::Select { options } => ("select", Some(options), None),
                        FieldKind::Text { placeholder } => ("text", None, placeholder),
                        FieldKind::Textarea { placeholder } => ("textarea", None, placeholder),
                    };
                    FormFieldDto {
                        name: field.name,
                        field_type: field_type.to_string(),
                        options,
                        placeholder,
                    }
                })
                .collect(),
        }
    }
}

// ===== Prospect conversions =====

impl From<contract::Prospect> for ProspectDto {
    fn from(p: contract::Prospect) -> Self {
        Self {
            id: p.id,
            tenant: p.tenant_key,
            name: p.name,
            email: p.email,
            phone: p.phone,
            project_type: p.project_type,
            budget_range: p.budget_range,
            timeline: p.timeline,
            message: p.message,
            notes: p.notes,
            details: p.details,
            status: p.status,
            priority: p.priority.as_str().to_string(),
            created_at: Some(p.created_at),
            updated_at: Some(p.updated_at),
        }
    }
}

impl From<UpdateProspectRequest> for contract::ProspectUpdate {
    fn from(req: UpdateProspectRequest) -> Self {
        Self {
            status: req.status,
            notes: req.notes,
        }
    }
}

/// Flatten a posted JSON object into a lead payload
///
/// Scalars become strings and nulls are dropped; nested values are rejected.
pub fn lead_payload_from_json(
    body: BTreeMap<String, serde_json::Value>,
) -> Result<contract::LeadPayload, SitesError> {
    let mut fields = BTreeMap::new();
    for (key, value) in body {
        let text = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(SitesError::validation(format!(
                    "field '{}' must be a string, number or boolean",
                    key
                )));
            }
        };
        fields.insert(key, text);
    }
    Ok(contract::LeadPayload { fields })
}

// ===== Analytics conversions =====

impl From<contract::DashboardAnalytics> for AnalyticsDto {
    fn from(a: contract::DashboardAnalytics) -> Self {
        Self {
            chats: ChatStatsDto {
                total: a.chats.total,
                this_week: a.chats.this_week,
                unique_sessions: a.chats.unique_sessions,
            },
            leads: LeadStatsDto {
                total: a.leads.total,
                high_priority: a.leads.high_priority,
                won: a.leads.won,
            },
        }
    }
}

impl From<contract::ChatReply> for ChatResponseDto {
    fn from(reply: contract::ChatReply) -> Self {
        Self {
            response: reply.response,
            model: reply.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_json_values_flatten_to_strings() {
        let body: BTreeMap<String, serde_json::Value> = serde_json::from_value(json!({
            "name": "Jane",
            "rooms": 3,
            "urgent": true,
            "phone": null
        }))
        .unwrap();

        let payload = lead_payload_from_json(body).unwrap();
        assert_eq!(payload.get("rooms"), Some("3"));
        assert_eq!(payload.get("urgent"), Some("true"));
        assert_eq!(payload.get("phone"), None);
    }

    #[test]
    fn nested_json_values_are_rejected() {
        let body: BTreeMap<String, serde_json::Value> =
            serde_json::from_value(json!({ "name": ["a", "b"] })).unwrap();
        assert!(matches!(
            lead_payload_from_json(body),
            Err(SitesError::Validation { .. })
        ));
    }

    #[test]
    fn analytics_use_camel_case_keys() {
        let dto = AnalyticsDto::from(contract::DashboardAnalytics {
            chats: contract::ChatStats {
                total: 4,
                this_week: 2,
                unique_sessions: 1,
            },
            leads: contract::LeadStats {
                total: 3,
                high_priority: 1,
                won: 1,
            },
        });
        let json = serde_json::to_value(dto).unwrap();
        assert_eq!(json["chats"]["thisWeek"], 2);
        assert_eq!(json["chats"]["uniqueSessions"], 1);
        assert_eq!(json["leads"]["highPriority"], 1);
    }
}
