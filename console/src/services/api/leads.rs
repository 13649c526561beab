//! # Lead Endpoints

use lib_core::Result;
use shared::{Lead, LeadId, LeadPatch, NewLead};

use super::client::{read_json, send, ApiClient};

#[tracing::instrument(skip(client))]
pub async fn list_leads(client: &ApiClient) -> Result<Vec<Lead>> {
    let request = client.authorized(client.client.get(client.url("/leads")));
    let leads: Vec<Lead> = read_json(send(request).await?).await?;
    tracing::debug!(count = leads.len(), "Leads fetched");
    Ok(leads)
}

#[tracing::instrument(skip(client, lead), fields(email = %lead.email))]
pub async fn create_lead(client: &ApiClient, lead: &NewLead) -> Result<Lead> {
    let request = client.authorized(client.client.post(client.url("/leads")).json(lead));
    let created: Lead = read_json(send(request).await?).await?;
    tracing::info!(id = created.id, "Lead created");
    Ok(created)
}

/// Partial update; only the fields present in `patch` are sent.
#[tracing::instrument(skip(client, patch), fields(fields = ?patch.changed_fields()))]
pub async fn update_lead(client: &ApiClient, id: LeadId, patch: &LeadPatch) -> Result<Lead> {
    let request = client.authorized(
        client
            .client
            .put(client.url(&format!("/leads/{id}")))
            .json(patch),
    );
    let updated: Lead = read_json(send(request).await?).await?;
    tracing::info!("Lead updated");
    Ok(updated)
}

/// Any 2xx counts as deleted; the body is ignored.
#[tracing::instrument(skip(client))]
pub async fn delete_lead(client: &ApiClient, id: LeadId) -> Result<()> {
    let request = client.authorized(client.client.delete(client.url(&format!("/leads/{id}"))));
    send(request).await?;
    tracing::info!("Lead deleted");
    Ok(())
}

/// Any 2xx counts as converted; the body is ignored.
#[tracing::instrument(skip(client))]
pub async fn convert_lead(client: &ApiClient, id: LeadId) -> Result<()> {
    let request = client.authorized(
        client
            .client
            .post(client.url(&format!("/leads/{id}/convert"))),
    );
    send(request).await?;
    tracing::info!("Lead converted");
    Ok(())
}
