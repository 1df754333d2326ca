//! Domain layer - business logic and services

pub mod chat;
pub mod hours;
pub mod registry;
pub mod repository;
pub mod service;
pub mod validation;

pub use registry::TenantRegistry;
pub use repository::{ChatLogRepository, ContentRepository, ProspectRepository};
pub use service::Service;
