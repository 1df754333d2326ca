//! Request host extraction for tenant resolution

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, Uri},
};
use std::convert::Infallible;

pub const FORWARDED_HOST: &str = "x-forwarded-host";

/// Hostname of the incoming request, lowercased and without a port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantHost(pub String);

impl<S> FromRequestParts<S> for TenantHost
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(request_host(&parts.headers, &parts.uri)))
    }
}

/// Host from `X-Forwarded-Host`, then `Host`, then the URI authority
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let raw = header(FORWARDED_HOST)
        .or_else(|| header("host"))
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default();

    strip_port(raw).to_ascii_lowercase()
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
