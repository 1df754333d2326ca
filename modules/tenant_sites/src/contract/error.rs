//! Contract error types for tenant sites
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Tenant sites domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitesError {
    /// Prospect or other addressable resource not found
    NotFound {
        /// Resource type (prospect, document)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Malformed request input
    Validation {
        /// Validation error message
        message: String,
    },
    /// Lead submission rejected; every problem is listed
    InvalidLead {
        /// One entry per failed rule
        errors: Vec<String>,
    },
    /// Internal error
    Internal,
}

impl SitesError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SitesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::InvalidLead { errors } => {
                write!(f, "Lead rejected: {}", errors.join(", "))
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for SitesError {}

/// Tenant registry failed to load; the process must not start
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read tenant registry {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tenant registry: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("tenant registry defines no tenants")]
    Empty,

    #[error("tenant #{index} ({hostname}) is missing required field '{field}'")]
    MissingField {
        index: usize,
        hostname: String,
        field: String,
    },

    #[error("tenant #{index} ({hostname}) has an invalid '{field}': {reason}")]
    InvalidField {
        index: usize,
        hostname: String,
        field: String,
        reason: String,
    },

    #[error("tenant hostname '{0}' must be registered without the 'www.' prefix")]
    WwwHostname(String),

    #[error("duplicate tenant hostname '{0}'")]
    DuplicateHostname(String),

    #[error("duplicate tenant brand key '{0}'")]
    DuplicateBrandKey(String),
}
