//! Open/closed status from a tenant's weekly hours

use crate::contract::{BusinessStatus, TenantProfile};
use chrono::{DateTime, Datelike, Utc};

/// Status of the tenant's business at `now`
pub fn status(profile: &TenantProfile, now: DateTime<Utc>) -> BusinessStatus {
    let hours = &profile.hours;
    let local = now.with_timezone(&hours.utc_offset);
    let time = local.time();
    let day = local.weekday().num_days_from_monday() as usize;

    let is_open = hours.weekly[day]
        .map(|window| window.open <= time && time <= window.close)
        .unwrap_or(false);

    let message = if is_open {
        format!("We're Open! Call us at {}", profile.phone)
    } else {
        format!("We're Currently Closed. Call {} to leave a message", profile.phone)
    };

    BusinessStatus {
        is_open,
        message,
        hours: hours.summary.clone(),
        current_day: local.format("%A").to_string(),
    }
}
