//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod tenant;

pub use error::Problem;
pub use routes::{register_routes, ApiDoc};
pub use tenant::TenantHost;
