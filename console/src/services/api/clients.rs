//! # Client Endpoint

use lib_core::Result;
use shared::Client;

use super::client::{read_json, send, ApiClient};

#[tracing::instrument(skip(client))]
pub async fn list_clients(client: &ApiClient) -> Result<Vec<Client>> {
    let request = client.authorized(client.client.get(client.url("/clients")));
    let clients: Vec<Client> = read_json(send(request).await?).await?;
    tracing::debug!(count = clients.len(), "Clients fetched");
    Ok(clients)
}
