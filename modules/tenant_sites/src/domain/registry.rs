//! Tenant registry and hostname resolution
//!
//! The registry is loaded once at startup and never changes afterwards.
//! Every profile is validated at load time; a half-populated brand is a
//! [`ConfigurationError`], not something to serve.

use crate::contract::{
    BrandAssets, BusinessHours, ColorScheme, ConfigurationError, OpeningWindow, ServiceOffering,
    TenantProfile,
};
use chrono::{FixedOffset, NaiveTime};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Registry table shipped with the crate
const BUILTIN_TENANTS: &str = include_str!("../../config/tenants.yaml");

const WWW_PREFIX: &str = "www.";

/// Schedule used by tenants that do not list their own hours
const DEFAULT_HOURS_SUMMARY: &str = "Mon-Fri 8AM-5PM, Sat 9AM-3PM";
const DEFAULT_UTC_OFFSET: &str = "-05:00";
const DEFAULT_WEEKDAY: &str = "08:00-17:00";
const DEFAULT_SATURDAY: &str = "09:00-15:00";
const CLOSED: &str = "closed";

/// Strip a single leading "www." (case-sensitive)
pub fn strip_www(hostname: &str) -> &str {
    hostname.strip_prefix(WWW_PREFIX).unwrap_or(hostname)
}

/// Static hostname to branding table. The first tenant is the default.
#[derive(Debug, Clone)]
pub struct TenantRegistry {
    tenants: Vec<TenantProfile>,
    by_hostname: HashMap<String, usize>,
    by_brand_key: HashMap<String, usize>,
}

impl TenantRegistry {
    /// Registry compiled into the crate
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_yaml(BUILTIN_TENANTS)
    }

    /// Load the registry from a YAML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Parse and validate a YAML registry table
    pub fn from_yaml(source: &str) -> Result<Self, ConfigurationError> {
        let raw: RawRegistry = serde_yaml::from_str(source)?;
        let tenants = raw
            .tenants
            .into_iter()
            .enumerate()
            .map(|(index, tenant)| tenant.into_profile(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tenants)
    }

    /// Build a registry from complete profiles
    pub fn new(tenants: Vec<TenantProfile>) -> Result<Self, ConfigurationError> {
        if tenants.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut by_hostname = HashMap::with_capacity(tenants.len());
        let mut by_brand_key = HashMap::with_capacity(tenants.len());
        for (index, tenant) in tenants.iter().enumerate() {
            check_complete(index, tenant)?;
            if tenant.hostname.starts_with(WWW_PREFIX) {
                return Err(ConfigurationError::WwwHostname(tenant.hostname.clone()));
            }
            if by_hostname.insert(tenant.hostname.clone(), index).is_some() {
                return Err(ConfigurationError::DuplicateHostname(tenant.hostname.clone()));
            }
            if by_brand_key.insert(tenant.brand_key.clone(), index).is_some() {
                return Err(ConfigurationError::DuplicateBrandKey(tenant.brand_key.clone()));
            }
        }

        tracing::debug!(
            tenants = tenants.len(),
            default = %tenants[0].hostname,
            "Tenant registry loaded"
        );

        Ok(Self {
            tenants,
            by_hostname,
            by_brand_key,
        })
    }

    /// Branding for a hostname. Unknown hosts get the default tenant.
    pub fn resolve(&self, hostname: &str) -> &TenantProfile {
        let host = strip_www(hostname);
        match self.by_hostname.get(host) {
            Some(&index) => &self.tenants[index],
            None => {
                tracing::debug!(host = %hostname, "Unknown host, serving default tenant");
                self.default_tenant()
            }
        }
    }

    pub fn default_tenant(&self) -> &TenantProfile {
        &self.tenants[0]
    }

    pub fn by_brand_key(&self, brand_key: &str) -> Option<&TenantProfile> {
        self.by_brand_key
            .get(brand_key)
            .map(|&index| &self.tenants[index])
    }

    /// Storage partition for a brand key; unknown keys map to the default tenant
    pub fn partition_key<'a>(&'a self, brand_key: &str) -> &'a str {
        self.by_brand_key(brand_key)
            .unwrap_or_else(|| self.default_tenant())
            .brand_key
            .as_str()
    }

    pub fn tenants(&self) -> &[TenantProfile] {
        &self.tenants
    }
}

/// Reject profiles with blank fields, no services or inverted opening windows
fn check_complete(index: usize, tenant: &TenantProfile) -> Result<(), ConfigurationError> {
    let f = Fields {
        index,
        hostname: &tenant.hostname,
    };
    let mut required: Vec<(String, &str)> = vec![
        ("hostname".into(), tenant.hostname.as_str()),
        ("brand_key".into(), tenant.brand_key.as_str()),
        ("company_name".into(), tenant.company_name.as_str()),
        ("tagline".into(), tenant.tagline.as_str()),
        ("specialty".into(), tenant.specialty.as_str()),
        ("location".into(), tenant.location.as_str()),
        ("phone".into(), tenant.phone.as_str()),
        ("colors.primary".into(), tenant.colors.primary.as_str()),
        ("colors.secondary".into(), tenant.colors.secondary.as_str()),
        ("colors.accent".into(), tenant.colors.accent.as_str()),
        ("assets.logo".into(), tenant.assets.logo.as_str()),
        ("assets.hero_image".into(), tenant.assets.hero_image.as_str()),
        ("hours.summary".into(), tenant.hours.summary.as_str()),
    ];
    for (i, service) in tenant.services.iter().enumerate() {
        required.push((format!("services[{}].name", i), service.name.as_str()));
        required.push((format!("services[{}].icon", i), service.icon.as_str()));
        required.push((format!("services[{}].description", i), service.description.as_str()));
    }

    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(f.missing(field));
    }
    if tenant.services.is_empty() {
        return Err(f.missing("services"));
    }
    for (day, window) in WEEKDAYS.iter().zip(&tenant.hours.weekly) {
        if let Some(window) = window {
            if window.open >= window.close {
                return Err(f.invalid(
                    &format!("hours.weekly.{}", day),
                    "opening time must be before closing time",
                ));
            }
        }
    }
    Ok(())
}

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

// ===== YAML shape =====

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    #[serde(default)]
    tenants: Vec<RawTenant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTenant {
    hostname: Option<String>,
    brand_key: Option<String>,
    company_name: Option<String>,
    tagline: Option<String>,
    specialty: Option<String>,
    location: Option<String>,
    phone: Option<String>,
    colors: Option<RawColors>,
    assets: Option<RawAssets>,
    services: Option<Vec<RawService>>,
    hours: Option<RawHours>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColors {
    primary: Option<String>,
    secondary: Option<String>,
    accent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssets {
    logo: Option<String>,
    hero_image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawService {
    name: Option<String>,
    icon: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHours {
    summary: Option<String>,
    utc_offset: Option<String>,
    #[serde(default)]
    weekly: RawWeekly,
}

/// "HH:MM-HH:MM" or "closed" per day; an omitted day is closed
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWeekly {
    monday: Option<String>,
    tuesday: Option<String>,
    wednesday: Option<String>,
    thursday: Option<String>,
    friday: Option<String>,
    saturday: Option<String>,
    sunday: Option<String>,
}

impl RawWeekly {
    fn into_days(self) -> [Option<String>; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }
}

impl Default for RawHours {
    fn default() -> Self {
        let weekday = || Some(DEFAULT_WEEKDAY.to_string());
        Self {
            summary: Some(DEFAULT_HOURS_SUMMARY.to_string()),
            utc_offset: Some(DEFAULT_UTC_OFFSET.to_string()),
            weekly: RawWeekly {
                monday: weekday(),
                tuesday: weekday(),
                wednesday: weekday(),
                thursday: weekday(),
                friday: weekday(),
                saturday: Some(DEFAULT_SATURDAY.to_string()),
                sunday: Some(CLOSED.to_string()),
            },
        }
    }
}

impl RawHours {
    fn into_hours(self, f: &Fields<'_>) -> Result<BusinessHours, ConfigurationError> {
        let summary = f.require("hours.summary", self.summary)?;
        let offset = f.require("hours.utc_offset", self.utc_offset)?;
        let utc_offset = offset
            .parse::<FixedOffset>()
            .map_err(|e| f.invalid("hours.utc_offset", &e.to_string()))?;

        let mut weekly = [None; 7];
        for (i, value) in self.weekly.into_days().into_iter().enumerate() {
            if let Some(value) = value {
                let field = format!("hours.weekly.{}", WEEKDAYS[i]);
                weekly[i] = parse_window(&value).map_err(|reason| f.invalid(&field, &reason))?;
            }
        }

        Ok(BusinessHours {
            summary,
            utc_offset,
            weekly,
        })
    }
}

fn parse_window(value: &str) -> Result<Option<OpeningWindow>, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(CLOSED) {
        return Ok(None);
    }
    let (open, close) = value
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM or '{}', got '{}'", CLOSED, value))?;
    let time = |s: &str| {
        NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| format!("'{}': {}", s.trim(), e))
    };
    Ok(Some(OpeningWindow {
        open: time(open)?,
        close: time(close)?,
    }))
}

/// Field checker bound to one tenant entry for error reporting
struct Fields<'a> {
    index: usize,
    hostname: &'a str,
}

impl Fields<'_> {
    fn require(&self, field: &str, value: Option<String>) -> Result<String, ConfigurationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            _ => Err(self.missing(field)),
        }
    }

    fn missing(&self, field: &str) -> ConfigurationError {
        ConfigurationError::MissingField {
            index: self.index,
            hostname: self.hostname.to_string(),
            field: field.to_string(),
        }
    }

    fn invalid(&self, field: &str, reason: &str) -> ConfigurationError {
        ConfigurationError::InvalidField {
            index: self.index,
            hostname: self.hostname.to_string(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl RawTenant {
    fn into_profile(self, index: usize) -> Result<TenantProfile, ConfigurationError> {
        let hostname_label = self
            .hostname
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string());
        let f = Fields {
            index,
            hostname: &hostname_label,
        };

        let hostname = f.require("hostname", self.hostname)?;
        let brand_key = f.require("brand_key", self.brand_key)?;
        let company_name = f.require("company_name", self.company_name)?;
        let tagline = f.require("tagline", self.tagline)?;
        let specialty = f.require("specialty", self.specialty)?;
        let location = f.require("location", self.location)?;
        let phone = f.require("phone", self.phone)?;

        let colors = self.colors.unwrap_or_default();
        let colors = ColorScheme {
            primary: f.require("colors.primary", colors.primary)?,
            secondary: f.require("colors.secondary", colors.secondary)?,
            accent: f.require("colors.accent", colors.accent)?,
        };

        let assets = self.assets.unwrap_or_default();
        let assets = BrandAssets {
            logo: f.require("assets.logo", assets.logo)?,
            hero_image: f.require("assets.hero_image", assets.hero_image)?,
        };

        let raw_services = self.services.unwrap_or_default();
        if raw_services.is_empty() {
            return Err(f.missing("services"));
        }
        let services = raw_services
            .into_iter()
            .enumerate()
            .map(|(i, s)| -> Result<ServiceOffering, ConfigurationError> {
                Ok(ServiceOffering {
                    name: f.require(&format!("services[{}].name", i), s.name)?,
                    icon: f.require(&format!("services[{}].icon", i), s.icon)?,
                    description: f
                        .require(&format!("services[{}].description", i), s.description)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let hours = self.hours.unwrap_or_default().into_hours(&f)?;

        Ok(TenantProfile {
            hostname,
            brand_key,
            company_name,
            tagline,
            specialty,
            location,
            phone,
            colors,
            assets,
            services,
            hours,
        })
    }
}
