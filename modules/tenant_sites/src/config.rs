//! Configuration for the tenant sites module

use crate::domain::validation::PayloadLimits;
use serde::Deserialize;
use std::path::PathBuf;

/// Tenant sites configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tenant registry file; the built-in table is used when unset
    #[serde(default)]
    pub tenants_file: Option<PathBuf>,

    /// Insert sample content when the content table is empty
    #[serde(default = "default_true")]
    pub seed_sample_content: bool,

    /// Maximum number of fields in a quote form submission
    #[serde(default = "default_max_payload_fields")]
    pub max_payload_fields: usize,

    /// Maximum length of a single submitted value, in characters
    #[serde(default = "default_max_field_length")]
    pub max_field_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tenants_file: None,
            seed_sample_content: true,
            max_payload_fields: default_max_payload_fields(),
            max_field_length: default_max_field_length(),
        }
    }
}

impl Config {
    pub fn payload_limits(&self) -> PayloadLimits {
        PayloadLimits {
            max_fields: self.max_payload_fields,
            max_field_length: self.max_field_length,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_payload_fields() -> usize {
    64
}

fn default_max_field_length() -> usize {
    2000
}
