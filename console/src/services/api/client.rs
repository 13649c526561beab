//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use async_trait::async_trait;
use lib_core::{AppError, AuthSession, CrmApi, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{Client as CrmClient, ErrorResponse, Lead, LeadId, LeadPatch, NewLead, Stats, TokenResponse};

use crate::config::ConsoleConfig;

/// HTTP client for the lead API.
///
/// Holds a pooled `reqwest` client, the API base URL and a handle on the auth
/// session, which is read on every request so a login or logout takes effect
/// immediately.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: AuthSession,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: AuthSession, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn from_config(config: &ConsoleConfig, session: AuthSession) -> Result<Self> {
        Self::new(config.api_url.clone(), session, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if signed in.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Send a request; any non-2xx status becomes [`AppError::Http`] carrying the
/// server's `detail` string when there is one.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await.map_err(|e| {
        tracing::error!(error = %e, "Network error");
        AppError::Network(e.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|error| error.message().map(str::to_string));

    tracing::warn!(status = status.as_u16(), detail = ?detail, "Request failed");
    Err(AppError::Http {
        status: status.as_u16(),
        detail,
    })
}

/// Decode a successful JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        AppError::Decode(e.to_string())
    })
}

#[async_trait(?Send)]
impl CrmApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        super::auth::login(self, username, password).await
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        super::leads::list_leads(self).await
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<Lead> {
        super::leads::create_lead(self, lead).await
    }

    async fn update_lead(&self, id: LeadId, patch: &LeadPatch) -> Result<Lead> {
        super::leads::update_lead(self, id, patch).await
    }

    async fn delete_lead(&self, id: LeadId) -> Result<()> {
        super::leads::delete_lead(self, id).await
    }

    async fn convert_lead(&self, id: LeadId) -> Result<()> {
        super::leads::convert_lead(self, id).await
    }

    async fn list_clients(&self) -> Result<Vec<CrmClient>> {
        super::clients::list_clients(self).await
    }

    async fn stats(&self) -> Result<Stats> {
        super::stats::get_stats(self).await
    }
}
