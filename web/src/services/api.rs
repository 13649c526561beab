//! gloo-net client for the lead API

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use lib_core::{AppError, AuthSession, CrmApi, Result};
use serde::de::DeserializeOwned;
use shared::{Client, ErrorResponse, Lead, LeadId, LeadPatch, NewLead, Stats, TokenResponse};

/// Browser HTTP client. No request timeout; the browser's own limits apply.
#[derive(Clone)]
pub struct GlooApi {
    base_url: String,
    session: AuthSession,
}

impl GlooApi {
    pub fn new(base_url: &str, session: AuthSession) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(bearer) => request.header("Authorization", &bearer),
            None => request,
        }
    }
}

pub fn provide_api_context(api: GlooApi) {
    provide_context(api);
}

pub fn use_api() -> GlooApi {
    expect_context::<GlooApi>()
}

/// `application/x-www-form-urlencoded` login body.
pub fn form_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

/// Error for a non-2xx response, keeping `detail` only when it is a string.
pub fn http_error(status: u16, body: &str) -> AppError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|error| error.message().map(str::to_string));
    log::warn!("Request failed: HTTP {} ({:?})", status, detail);
    AppError::Http { status, detail }
}

fn network(e: gloo_net::Error) -> AppError {
    log::error!("Network error: {}", e);
    AppError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(http_error(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await.map_err(network)?;
    serde_json::from_str(&text).map_err(|e| AppError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CrmApi for GlooApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let response = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_body(username, password))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        let response = self
            .authorized(Request::get(&self.url("/leads")))
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<Lead> {
        let response = self
            .authorized(Request::post(&self.url("/leads")))
            .json(lead)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }

    async fn update_lead(&self, id: LeadId, patch: &LeadPatch) -> Result<Lead> {
        let response = self
            .authorized(Request::put(&self.url(&format!("/leads/{id}"))))
            .json(patch)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }

    async fn delete_lead(&self, id: LeadId) -> Result<()> {
        let response = self
            .authorized(Request::delete(&self.url(&format!("/leads/{id}"))))
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(|_| ())
    }

    async fn convert_lead(&self, id: LeadId) -> Result<()> {
        let response = self
            .authorized(Request::post(&self.url(&format!("/leads/{id}/convert"))))
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(|_| ())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let response = self
            .authorized(Request::get(&self.url("/clients")))
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }

    async fn stats(&self) -> Result<Stats> {
        let response = self
            .authorized(Request::get(&self.url("/stats")))
            .send()
            .await
            .map_err(network)?;
        read_json(check(response).await?).await
    }
}
