//! # Service Traits
//!
//! The API seam between the view models and whichever HTTP stack a front-end uses
//! (reqwest in the console, gloo-net in the browser, an in-memory fake in tests).
//!
//! Futures are not required to be `Send`: browser fetch futures are not, and every
//! front-end drives its requests from a single UI thread.

use async_trait::async_trait;
use shared::{Client, Lead, LeadId, LeadPatch, NewLead, Stats, TokenResponse};

use crate::error::Result;

/// Lead tracking REST API.
///
/// Implementations attach the session's bearer token to every call except
/// [`login`](CrmApi::login) and map non-2xx responses to
/// [`AppError::Http`](crate::AppError::Http) with the body's `detail` string.
#[async_trait(?Send)]
pub trait CrmApi {
    /// `POST /auth/login` with a form-urlencoded `username`/`password` body.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse>;

    /// `GET /leads`
    async fn list_leads(&self) -> Result<Vec<Lead>>;

    /// `POST /leads`
    async fn create_lead(&self, lead: &NewLead) -> Result<Lead>;

    /// `PUT /leads/{id}` with only the changed fields.
    async fn update_lead(&self, id: LeadId, patch: &LeadPatch) -> Result<Lead>;

    /// `DELETE /leads/{id}`
    async fn delete_lead(&self, id: LeadId) -> Result<()>;

    /// `POST /leads/{id}/convert`
    async fn convert_lead(&self, id: LeadId) -> Result<()>;

    /// `GET /clients`
    async fn list_clients(&self) -> Result<Vec<Client>>;

    /// `GET /stats`
    async fn stats(&self) -> Result<Stats>;
}
