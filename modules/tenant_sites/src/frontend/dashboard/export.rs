//! CSV export of the prospect list

use crate::api::rest::dto::ProspectDto;
use chrono::NaiveDate;

pub const CSV_HEADERS: [&str; 8] = [
    "Name", "Email", "Phone", "Project", "Budget", "Timeline", "Status", "Date",
];

const NOT_SPECIFIED: &str = "Not specified";
const UNKNOWN_DATE: &str = "Unknown";

pub fn project_label(code: &str) -> &str {
    match code {
        "cabinets" => "Kitchen Cabinets",
        "countertops" => "Countertops",
        "tile" => "Tile Work",
        "painting" => "Commercial Painting",
        "other" => "Other",
        unknown => unknown,
    }
}

pub fn budget_label(code: &str) -> &str {
    match code {
        "under-5k" => "Under $5,000",
        "5k-15k" => "$5,000 - $15,000",
        "15k-30k" => "$15,000 - $30,000",
        "30k-50k" => "$30,000 - $50,000",
        "over-50k" => "Over $50,000",
        unknown => unknown,
    }
}

pub fn timeline_label(code: &str) -> &str {
    match code {
        "asap" => "ASAP",
        "1-month" => "Within 1 Month",
        "3-months" => "Within 3 Months",
        "6-months" => "Within 6 Months",
        "flexible" => "Flexible",
        unknown => unknown,
    }
}

/// RFC 4180 quoting for values with separators, quotes or line breaks
fn escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn or_not_specified(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_SPECIFIED)
}

fn row(p: &ProspectDto) -> Vec<String> {
    let status = if p.status.is_empty() { "new" } else { p.status.as_str() };
    let date = p
        .created_at
        .map(|at| at.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    vec![
        or_not_specified(Some(p.name.as_str())).to_string(),
        or_not_specified(p.email.as_deref()).to_string(),
        or_not_specified(p.phone.as_deref()).to_string(),
        or_not_specified(p.project_type.as_deref().map(project_label)).to_string(),
        or_not_specified(p.budget_range.as_deref().map(budget_label)).to_string(),
        or_not_specified(p.timeline.as_deref().map(timeline_label)).to_string(),
        status.to_string(),
        date,
    ]
}

/// Render prospects as CSV: a header row then one row per prospect
pub fn export_csv(prospects: &[ProspectDto]) -> String {
    let mut lines = Vec::with_capacity(prospects.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for prospect in prospects {
        let cells: Vec<String> = row(prospect).iter().map(|c| escape(c)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// File name for an export taken on `date`
pub fn csv_filename(brand: &str, date: NaiveDate) -> String {
    format!("{}-leads-{}.csv", brand, date.format("%Y-%m-%d"))
}
