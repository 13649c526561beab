//! Application constants

/// API base URL, set at build time through `CRM_API_URL`.
pub const API_BASE: &str = match option_env!("CRM_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "crm.auth_token";
