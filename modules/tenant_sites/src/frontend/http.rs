//! HTTP client for the public site and dashboard endpoints

use crate::api::rest::{
    dto::{
        AnalyticsDto, BrandingDto, BusinessStatusDto, ChatRequest, ChatResponseDto, ProspectDto,
        UpdateProspectRequest,
    },
    tenant::FORWARDED_HOST,
    Problem,
};
use crate::contract::LeadPayload;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection refused, timeout, DNS failure and the like
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server rejected request with status {status}")]
    Rejected {
        status: StatusCode,
        problem: Option<Problem>,
    },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Failures a visitor cannot fix by editing the form
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Rejected { status, .. } => status.is_server_error(),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidUrl(_) => true,
        }
    }

    pub fn problem(&self) -> Option<&Problem> {
        match self {
            Self::Rejected { problem, .. } => problem.as_ref(),
            _ => None,
        }
    }
}

/// Client bound to one backend and, optionally, one tenant host
#[derive(Debug, Clone)]
pub struct SitesClient {
    http: reqwest::Client,
    base_url: Url,
    host: Option<String>,
}

impl SitesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            host: None,
        })
    }

    /// Send requests as if served for `host` (via `X-Forwarded-Host`)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.base_url.join(path)?;
        let mut builder = self.http.request(method, url);
        if let Some(host) = &self.host {
            builder = builder.header(FORWARDED_HOST, host);
        }
        Ok(builder)
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await.map_err(ClientError::Transport)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let problem = response.json::<Problem>().await.ok();
            return Err(ClientError::Rejected { status, problem });
        }
        response.json::<T>().await.map_err(ClientError::Decode)
    }

    pub async fn branding(&self) -> Result<BrandingDto, ClientError> {
        Self::send(self.request(reqwest::Method::GET, "/api/branding")?).await
    }

    pub async fn business_status(&self) -> Result<BusinessStatusDto, ClientError> {
        Self::send(self.request(reqwest::Method::GET, "/api/business-status")?).await
    }

    pub async fn submit_prospect(&self, payload: &LeadPayload) -> Result<ProspectDto, ClientError> {
        let builder = self
            .request(reqwest::Method::POST, "/api/prospects")?
            .json(&payload.fields);
        Self::send(builder).await
    }

    /// All prospects, newest first, optionally for one brand key
    pub async fn fetch_prospects(&self, tenant: Option<&str>) -> Result<Vec<ProspectDto>, ClientError> {
        let mut builder = self.request(reqwest::Method::GET, "/api/prospects")?;
        if let Some(tenant) = tenant {
            builder = builder.query(&[("tenant", tenant)]);
        }
        Self::send(builder).await
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsDto, ClientError> {
        Self::send(self.request(reqwest::Method::GET, "/api/analytics/dashboard")?).await
    }

    /// Persist a status and/or notes change
    pub async fn update_status(
        &self,
        id: Uuid,
        update: &UpdateProspectRequest,
    ) -> Result<ProspectDto, ClientError> {
        let builder = self
            .request(reqwest::Method::PUT, &format!("/api/prospects/{}/status", id))?
            .json(update);
        Self::send(builder).await
    }

    pub async fn chat(&self, message: &str, session_id: Option<&str>) -> Result<ChatResponseDto, ClientError> {
        let builder = self.request(reqwest::Method::POST, "/api/chat")?.json(&ChatRequest {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
        });
        Self::send(builder).await
    }
}
