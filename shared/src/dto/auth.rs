use serde::{Deserialize, Serialize};

/// Token endpoint response (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Error body returned by the API.
///
/// `detail` is usually a human-readable string, but request validation failures
/// carry a list of issues instead, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The `detail` message, when the server sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
