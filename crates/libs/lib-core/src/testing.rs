//! In-memory stand-in for the lead tracking API, used by the view tests.
//!
//! Behaves like the real server for the parts the views depend on (id
//! assignment, patch application, conversion creating a client) and records
//! every call so tests can assert on what went over the wire.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use shared::{Client, Lead, LeadId, LeadPatch, LeadStatus, NewLead, Stats, TokenResponse};

use crate::error::{AppError, Result};
use crate::service::CrmApi;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Backend {
    leads: Vec<Lead>,
    clients: Vec<Client>,
    next_lead_id: LeadId,
    next_client_id: i64,
    calls: Vec<Call>,
    fail_next: Option<AppError>,
}

#[derive(Default)]
pub struct FakeCrm {
    inner: Mutex<Backend>,
}

pub fn lead(id: LeadId, name: &str, status: &str) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        status: Some(status.to_string()),
    }
}

impl FakeCrm {
    pub fn new() -> Self {
        let fake = Self::default();
        fake.inner.lock().next_lead_id = 1;
        fake.inner.lock().next_client_id = 1;
        fake
    }

    pub fn with_leads(leads: Vec<Lead>) -> Self {
        let fake = Self::new();
        {
            let mut backend = fake.inner.lock();
            backend.next_lead_id = leads.iter().map(|l| l.id).max().unwrap_or(0) + 1;
            backend.leads = leads;
        }
        fake
    }

    /// Make the next call fail with `error` instead of touching any data.
    pub fn fail_next(&self, error: AppError) {
        self.inner.lock().fail_next = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().calls.clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.method == method).collect()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) -> Result<()> {
        let mut backend = self.inner.lock();
        backend.calls.push(Call { method, path, body });
        match backend.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn not_found() -> AppError {
    AppError::Http {
        status: 404,
        detail: Some("Lead not found".to_string()),
    }
}

#[async_trait(?Send)]
impl CrmApi for FakeCrm {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        self.record("POST", "/auth/login".to_string(), None)?;
        if username == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(TokenResponse {
                access_token: "fake-jwt".to_string(),
                token_type: Some("bearer".to_string()),
            })
        } else {
            Err(AppError::Http {
                status: 401,
                detail: Some("Incorrect email or password".to_string()),
            })
        }
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        self.record("GET", "/leads".to_string(), None)?;
        Ok(self.inner.lock().leads.clone())
    }

    async fn create_lead(&self, new: &NewLead) -> Result<Lead> {
        self.record("POST", "/leads".to_string(), serde_json::to_value(new).ok())?;
        let mut backend = self.inner.lock();
        let created = Lead {
            id: backend.next_lead_id,
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            status: Some(LeadStatus::Lead.to_string()),
        };
        backend.next_lead_id += 1;
        backend.leads.push(created.clone());
        Ok(created)
    }

    async fn update_lead(&self, id: LeadId, patch: &LeadPatch) -> Result<Lead> {
        self.record("PUT", format!("/leads/{id}"), serde_json::to_value(patch).ok())?;
        let mut backend = self.inner.lock();
        let lead = backend.leads.iter_mut().find(|l| l.id == id).ok_or_else(not_found)?;
        if let Some(name) = &patch.name {
            lead.name = name.clone();
        }
        if let Some(email) = &patch.email {
            lead.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            lead.phone = phone.clone();
        }
        if let Some(status) = patch.status {
            lead.status = Some(status.to_string());
        }
        Ok(lead.clone())
    }

    async fn delete_lead(&self, id: LeadId) -> Result<()> {
        self.record("DELETE", format!("/leads/{id}"), None)?;
        let mut backend = self.inner.lock();
        let before = backend.leads.len();
        backend.leads.retain(|l| l.id != id);
        if backend.leads.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn convert_lead(&self, id: LeadId) -> Result<()> {
        self.record("POST", format!("/leads/{id}/convert"), None)?;
        let mut backend = self.inner.lock();
        let lead = backend.leads.iter_mut().find(|l| l.id == id).ok_or_else(not_found)?;
        lead.status = Some(LeadStatus::Converted.to_string());
        let lead = lead.clone();

        let client = Client {
            id: backend.next_client_id,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            source_lead_id: Some(id),
        };
        backend.next_client_id += 1;
        backend.clients.push(client);
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        self.record("GET", "/clients".to_string(), None)?;
        Ok(self.inner.lock().clients.clone())
    }

    async fn stats(&self) -> Result<Stats> {
        self.record("GET", "/stats".to_string(), None)?;
        let backend = self.inner.lock();
        Ok(Stats {
            total_leads: backend.leads.len() as u64,
            converted_leads: backend
                .leads
                .iter()
                .filter(|l| l.status() == Some(LeadStatus::Converted))
                .count() as u64,
            clients: backend.clients.len() as u64,
        })
    }
}
