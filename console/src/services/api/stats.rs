//! # Stats Endpoint

use lib_core::Result;
use shared::Stats;

use super::client::{read_json, send, ApiClient};

#[tracing::instrument(skip(client))]
pub async fn get_stats(client: &ApiClient) -> Result<Stats> {
    let request = client.authorized(client.client.get(client.url("/stats")));
    read_json(send(request).await?).await
}
