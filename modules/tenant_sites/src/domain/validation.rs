//! Lead payload validation
//!
//! A quote form posts an arbitrary key/value map. Validation splits it into
//! the core prospect attributes and free-form details, rejects submissions
//! without a name or a usable contact, and reports everything else as
//! non-blocking warnings.

use crate::contract::{FieldKind, FormTemplate, LeadPayload, SitesError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[allow(clippy::expect_used)]
static PHONE_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d{0,15}$").expect("valid phone pattern"));

/// Payload limits applied before any field rule
#[derive(Debug, Clone, Copy)]
pub struct PayloadLimits {
    pub max_fields: usize,
    pub max_field_length: usize,
}

impl Default for PayloadLimits {
    fn default() -> Self {
        Self {
            max_fields: 64,
            max_field_length: 2000,
        }
    }
}

/// Core attributes extracted from a valid payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub details: BTreeMap<String, String>,
    /// Problems with optional fields; they never block the submission
    pub warnings: Vec<String>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone check on digits only, so formatting like "(216) 268-2990" passes
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    PHONE_DIGITS_RE.is_match(&digits)
}

/// Canonical field name for known form aliases
fn canonical_key(key: &str) -> &str {
    match key {
        "project" => "project_type",
        "budget" => "budget_range",
        other => other,
    }
}

/// Validate a quote form submission against the tenant's form template
pub fn validate_lead(
    payload: &LeadPayload,
    template: &FormTemplate,
    limits: PayloadLimits,
) -> Result<ValidatedLead, SitesError> {
    let mut errors = Vec::new();

    if payload.fields.len() > limits.max_fields {
        return Err(SitesError::InvalidLead {
            errors: vec![format!(
                "too many fields: {} (limit {})",
                payload.fields.len(),
                limits.max_fields
            )],
        });
    }

    let mut lead = ValidatedLead::default();
    for (key, value) in &payload.fields {
        if value.chars().count() > limits.max_field_length {
            errors.push(format!(
                "{} exceeds {} characters",
                key, limits.max_field_length
            ));
            continue;
        }

        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let value = value.to_string();

        match canonical_key(key) {
            "name" => lead.name = value,
            "email" => lead.email = Some(value),
            "phone" => lead.phone = Some(value),
            "project_type" => lead.project_type = Some(value),
            "budget_range" => lead.budget_range = Some(value),
            "timeline" => lead.timeline = Some(value),
            "message" => lead.message = Some(value),
            other => {
                lead.details.insert(other.to_string(), value);
            }
        }
    }

    if lead.name.is_empty() {
        errors.push("name is required".to_string());
    }

    let email_ok = lead.email.as_deref().is_some_and(is_valid_email);
    let phone_ok = lead.phone.as_deref().is_some_and(is_valid_phone);

    if let Some(email) = lead.email.as_deref().filter(|_| !email_ok) {
        lead.warnings
            .push(format!("email '{}' does not look like an email address", email));
    }
    if let Some(phone) = lead.phone.as_deref().filter(|_| !phone_ok) {
        lead.warnings
            .push(format!("phone '{}' does not look like a phone number", phone));
    }
    if !email_ok && !phone_ok {
        errors.push("a valid email address or phone number is required".to_string());
    }

    if !errors.is_empty() {
        return Err(SitesError::InvalidLead { errors });
    }

    let mut warnings = Vec::new();
    check_select_options(&lead, template, &mut warnings);
    lead.warnings.extend(warnings);

    Ok(lead)
}

/// Select answers outside the template options are warnings only
fn check_select_options(lead: &ValidatedLead, template: &FormTemplate, warnings: &mut Vec<String>) {
    for field in &template.fields {
        let FieldKind::Select { options } = &field.kind else {
            continue;
        };
        let answer = match field.name.as_str() {
            "project_type" => lead.project_type.as_deref(),
            "budget_range" => lead.budget_range.as_deref(),
            "timeline" => lead.timeline.as_deref(),
            other => lead.details.get(other).map(String::as_str),
        };
        if let Some(answer) = answer {
            if !options.iter().any(|o| o == answer) {
                warnings.push(format!(
                    "{} '{}' is not one of the offered options",
                    field.name, answer
                ));
            }
        }
    }
}
