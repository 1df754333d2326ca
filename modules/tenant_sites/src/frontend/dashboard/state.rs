//! Dashboard state and the pure functions computed over it

use crate::api::rest::dto::{AnalyticsDto, ProspectDto};
use crate::contract::{lead_status, Priority};
use chrono::{DateTime, NaiveDate, Utc};

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub prospects: Vec<ProspectDto>,
    pub analytics: AnalyticsDto,
    pub search_query: String,
    pub status_filter: String,
    /// Ticket of the refresh whose results are shown
    pub generation: u64,
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// Prospects matching the current search box and status filter
    pub fn visible(&self) -> Vec<ProspectDto> {
        filter_prospects(&self.prospects, &self.search_query, &self.status_filter)
    }

    /// Change a status in the local list only
    pub fn set_status(&mut self, id: uuid::Uuid, status: &str) -> bool {
        match self.prospects.iter_mut().find(|p| p.id == id) {
            Some(prospect) => {
                prospect.status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Change notes in the local list only
    pub fn save_notes(&mut self, id: uuid::Uuid, notes: &str) -> bool {
        match self.prospects.iter_mut().find(|p| p.id == id) {
            Some(prospect) => {
                prospect.notes = Some(notes.to_string());
                true
            }
            None => false,
        }
    }
}

fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Case-insensitive search on name, email, phone and project type, AND an exact status
///
/// Empty query and empty status match everything.
pub fn filter_prospects(prospects: &[ProspectDto], query: &str, status: &str) -> Vec<ProspectDto> {
    let needle = query.trim().to_lowercase();
    prospects
        .iter()
        .filter(|p| {
            needle.is_empty()
                || contains_ci(Some(p.name.as_str()), &needle)
                || contains_ci(p.email.as_deref(), &needle)
                || contains_ci(p.phone.as_deref(), &needle)
                || contains_ci(p.project_type.as_deref(), &needle)
        })
        .filter(|p| status.is_empty() || p.status == status)
        .cloned()
        .collect()
}

pub fn high_priority_count(prospects: &[ProspectDto]) -> usize {
    prospects
        .iter()
        .filter(|p| p.priority == Priority::High.as_str())
        .count()
}

/// Prospects created on `today` (UTC calendar date)
pub fn new_leads_count(prospects: &[ProspectDto], today: NaiveDate) -> usize {
    prospects
        .iter()
        .filter(|p| p.created_at.is_some_and(|at| at.date_naive() == today))
        .count()
}

/// Won prospects as a rounded percentage of all prospects; 0 for none
pub fn conversion_rate(prospects: &[ProspectDto]) -> u32 {
    if prospects.is_empty() {
        return 0;
    }
    let won = prospects.iter().filter(|p| p.status == lead_status::WON).count();
    (won as f64 / prospects.len() as f64 * 100.0).round() as u32
}
