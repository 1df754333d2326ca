//! Quote form submission with a phone-call fallback

use super::http::SitesClient;
use crate::api::rest::dto::ProspectDto;
use crate::contract::LeadPayload;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your quote request has been received. We'll contact you within 24 hours.";

/// Result of one submission attempt as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted {
        prospect: Box<ProspectDto>,
        message: String,
    },
    /// The server refused the input; fields are kept for editing
    NeedsCorrection {
        message: String,
        errors: Vec<String>,
    },
    /// The backend is unreachable or failing; fields are kept
    CallUs { message: String },
}

pub fn call_us_message(phone: &str) -> String {
    format!(
        "Thank you for your interest! Please call us at {} to discuss your project.",
        phone
    )
}

/// Client-side state of the public quote form
#[derive(Debug)]
pub struct QuoteForm {
    client: SitesClient,
    fallback_phone: String,
    fields: LeadPayload,
    submitting: bool,
}

impl QuoteForm {
    pub fn new(client: SitesClient, fallback_phone: impl Into<String>) -> Self {
        Self {
            client,
            fallback_phone: fallback_phone.into(),
            fields: LeadPayload::new(),
            submitting: false,
        }
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> &LeadPayload {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the current fields; the form is usable again whatever happens,
    /// including when the returned future is dropped mid-request
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let in_flight = InFlight::start(&mut self.submitting);
        let result = self.client.submit_prospect(&self.fields).await;
        drop(in_flight);

        match result {
            Ok(prospect) => {
                tracing::info!(prospect_id = %prospect.id, "Quote request accepted");
                self.fields = LeadPayload::new();
                SubmissionOutcome::Accepted {
                    prospect: Box::new(prospect),
                    message: SUCCESS_MESSAGE.to_string(),
                }
            }
            Err(e) if e.is_unavailable() => {
                tracing::warn!(error = %e, "Quote request could not be delivered");
                SubmissionOutcome::CallUs {
                    message: call_us_message(&self.fallback_phone),
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "Quote request rejected");
                let (message, errors) = match e.problem() {
                    Some(problem) => (
                        problem
                            .detail
                            .clone()
                            .unwrap_or_else(|| problem.title.clone()),
                        problem.errors.clone(),
                    ),
                    None => (e.to_string(), Vec::new()),
                };
                SubmissionOutcome::NeedsCorrection { message, errors }
            }
        }
    }
}

/// Holds the submitting flag up until dropped
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_message_names_the_phone() {
        assert_eq!(
            call_us_message("216-268-2990"),
            "Thank you for your interest! Please call us at 216-268-2990 to discuss your project."
        );
    }

    #[test]
    fn in_flight_flag_clears_on_drop() {
        let mut flag = false;
        {
            let _in_flight = InFlight::start(&mut flag);
        }
        assert!(!flag);
    }
}
