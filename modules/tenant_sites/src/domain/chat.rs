//! Rule-based replies for the chat widget

use crate::contract::{BusinessStatus, ChatReply, TenantProfile};

pub const RULES_MODEL: &str = "simple";

const HOURS_WORDS: &[&str] = &["open", "hours", "closed", "time"];
const CONTACT_WORDS: &[&str] = &["contact", "phone", "call", "reach", "quote"];
const SERVICE_WORDS: &[&str] = &["service", "services", "offer", "do", "price", "pricing", "cost"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "morning", "afternoon", "evening"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Hours,
    Contact,
    Services,
    Greeting,
    Other,
}

fn classify(message: &str) -> Intent {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let mentions = |set: &[&str]| words.iter().any(|w| set.contains(w));

    if mentions(HOURS_WORDS) {
        Intent::Hours
    } else if mentions(CONTACT_WORDS) {
        Intent::Contact
    } else if mentions(SERVICE_WORDS) {
        Intent::Services
    } else if mentions(GREETING_WORDS) {
        Intent::Greeting
    } else {
        Intent::Other
    }
}

/// Reply to a visitor message in the voice of the given tenant
pub fn reply(profile: &TenantProfile, status: &BusinessStatus, message: &str) -> ChatReply {
    let response = match classify(message) {
        Intent::Hours => format!("{}. Our hours are {}.", status.message, status.hours),
        Intent::Contact => format!(
            "Call us at {} to talk with the {} team. {}. We serve {}.",
            profile.phone, profile.company_name, status.message, profile.location
        ),
        Intent::Services => {
            let names: Vec<&str> = profile.services.iter().map(|s| s.name.as_str()).collect();
            format!(
                "{} offers {}. Call {} for a free quote!",
                profile.company_name,
                names.join(", "),
                profile.phone
            )
        }
        Intent::Greeting => format!(
            "Hello! Welcome to {}. {}. How can we help with your {} project?",
            profile.company_name,
            status.message,
            profile.specialty.to_lowercase()
        ),
        Intent::Other => format!(
            "Thanks for contacting {}! For project details, call {} or fill out our quote form.",
            profile.company_name, profile.phone
        ),
    };

    ChatReply {
        response,
        model: RULES_MODEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hours;
    use crate::domain::registry::TenantRegistry;
    use chrono::{TimeZone, Utc};

    #[test]
    fn replies_use_the_tenant_voice() {
        let registry = TenantRegistry::builtin().unwrap();
        let profile = registry.resolve("giorgiy.org");
        let status = hours::status(profile, Utc::now());

        let services = reply(profile, &status, "What services do you offer?");
        for service in &profile.services {
            assert!(services.response.contains(&service.name));
        }

        let contact = reply(profile, &status, "Can I call you?");
        assert!(contact.response.contains(&profile.phone));
        assert!(contact.response.contains(&status.message));

        let greeting = reply(profile, &status, "Hi there");
        assert!(greeting.response.starts_with("Hello!"));
        assert!(greeting.response.contains(&profile.company_name));

        assert_eq!(reply(profile, &status, "xyzzy").model, RULES_MODEL);
    }

    #[test]
    fn hours_questions_report_open_or_closed() {
        let registry = TenantRegistry::builtin().unwrap();
        let profile = registry.resolve("giorgiy.org");

        // Wednesday 10:00 and Sunday 10:00 at UTC-05:00
        let open = hours::status(profile, Utc.with_ymd_and_hms(2025, 1, 8, 15, 0, 0).unwrap());
        let closed = hours::status(profile, Utc.with_ymd_and_hms(2025, 1, 12, 15, 0, 0).unwrap());

        assert_eq!(
            reply(profile, &open, "When are you open?").response,
            "We're Open! Call us at 216-268-2990. Our hours are Mon-Fri 8AM-5PM, Sat 9AM-3PM."
        );
        let answer = reply(profile, &closed, "Are you closed today?").response;
        assert!(answer.starts_with("We're Currently Closed."));
        assert!(answer.ends_with("Our hours are Mon-Fri 8AM-5PM, Sat 9AM-3PM."));
    }

    #[test]
    fn greeting_words_are_matched_whole() {
        assert_eq!(classify("this is it"), Intent::Other);
        assert_eq!(classify("HEY!"), Intent::Greeting);
        assert_eq!(classify("hello, can I get a quote?"), Intent::Contact);
        assert_eq!(classify("what time do you open"), Intent::Hours);
    }
}
