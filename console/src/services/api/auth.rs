//! # Authentication Endpoint

use lib_core::Result;
use shared::TokenResponse;

use super::client::{read_json, send, ApiClient};

/// Exchange email and password for an access token.
///
/// The body is `application/x-www-form-urlencoded` with the email in the
/// `username` field. No bearer header is sent.
#[tracing::instrument(skip_all, fields(username = %username))]
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<TokenResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = client
        .client
        .post(client.url("/auth/login"))
        .form(&[("username", username), ("password", password)]);

    let token: TokenResponse = read_json(send(request).await?).await?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis() as u64,
        "Login successful"
    );
    Ok(token)
}
