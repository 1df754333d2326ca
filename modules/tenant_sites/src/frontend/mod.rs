//! Client side of the sites: quote form and admin dashboard over HTTP

pub mod dashboard;
pub mod http;
pub mod quote_form;

pub use dashboard::{Dashboard, DashboardState, DEFAULT_REFRESH_INTERVAL};
pub use http::{ClientError, SitesClient};
pub use quote_form::{QuoteForm, SubmissionOutcome};
