//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{chat_log, content_document, prospect};
use crate::contract::{ChatExchange, ContentDocument, DocumentBody, Prospect};
use std::collections::BTreeMap;

// ===== Content Document Conversions =====

impl TryFrom<content_document::Model> for ContentDocument {
    type Error = anyhow::Error;

    fn try_from(entity: content_document::Model) -> Result<Self, Self::Error> {
        let body: DocumentBody = serde_json::from_value(entity.body)?;
        let status = entity.status.parse().map_err(anyhow::Error::msg)?;

        Ok(Self {
            id: entity.id,
            tenant_key: entity.tenant_key,
            status,
            body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl TryFrom<&ContentDocument> for content_document::ActiveModel {
    type Error = anyhow::Error;

    fn try_from(model: &ContentDocument) -> Result<Self, Self::Error> {
        use sea_orm::ActiveValue::*;

        Ok(Self {
            id: Set(model.id),
            tenant_key: Set(model.tenant_key.clone()),
            doc_type: Set(model.kind().as_str().to_string()),
            status: Set(model.status.as_str().to_string()),
            title: Set(model.body.title().map(str::to_string)),
            description: Set(model.body.description().map(str::to_string)),
            body: Set(serde_json::to_value(&model.body)?),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        })
    }
}

// ===== Prospect Conversions =====

impl TryFrom<prospect::Model> for Prospect {
    type Error = anyhow::Error;

    fn try_from(entity: prospect::Model) -> Result<Self, Self::Error> {
        let details: BTreeMap<String, String> = if entity.details.is_null() {
            BTreeMap::new()
        } else {
            serde_json::from_value(entity.details)?
        };
        let priority = entity.priority.parse().map_err(anyhow::Error::msg)?;

        Ok(Self {
            id: entity.id,
            tenant_key: entity.tenant_key,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            project_type: entity.project_type,
            budget_range: entity.budget_range,
            timeline: entity.timeline,
            message: entity.message,
            notes: entity.notes,
            details,
            status: entity.status,
            priority,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl TryFrom<&Prospect> for prospect::ActiveModel {
    type Error = anyhow::Error;

    fn try_from(model: &Prospect) -> Result<Self, Self::Error> {
        use sea_orm::ActiveValue::*;

        Ok(Self {
            id: Set(model.id),
            tenant_key: Set(model.tenant_key.clone()),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            phone: Set(model.phone.clone()),
            project_type: Set(model.project_type.clone()),
            budget_range: Set(model.budget_range.clone()),
            timeline: Set(model.timeline.clone()),
            message: Set(model.message.clone()),
            notes: Set(model.notes.clone()),
            details: Set(serde_json::to_value(&model.details)?),
            status: Set(model.status.clone()),
            priority: Set(model.priority.as_str().to_string()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        })
    }
}

// ===== Chat Conversions =====

impl From<chat_log::Model> for ChatExchange {
    fn from(entity: chat_log::Model) -> Self {
        Self {
            id: entity.id,
            tenant_key: entity.tenant_key,
            session_id: entity.session_id,
            user_message: entity.user_message,
            response: entity.response,
            model: entity.model,
            created_at: entity.created_at,
        }
    }
}

impl From<&ChatExchange> for chat_log::ActiveModel {
    fn from(model: &ChatExchange) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            tenant_key: Set(model.tenant_key.clone()),
            session_id: Set(model.session_id.clone()),
            user_message: Set(model.user_message.clone()),
            response: Set(model.response.clone()),
            model: Set(model.model.clone()),
            created_at: Set(model.created_at),
        }
    }
}
