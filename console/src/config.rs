//! Console configuration from environment variables
//!
//! | Variable                | Default                 |
//! |-------------------------|-------------------------|
//! | `CRM_API_URL`           | `http://127.0.0.1:8000` |
//! | `CRM_TOKEN_FILE`        | `.crm_token`            |
//! | `CRM_HTTP_TIMEOUT_SECS` | `10`                    |
//! | `CRM_LOG_DIR`           | `logs`                  |
//! | `RUST_LOG`              | `crm_console=info,lib_core=info,warn` |
//!
//! A `.env` file in the working directory is read first when present.

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{self, get_env_or, get_env_parse_or};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOKEN_FILE: &str = ".crm_token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "crm_console=info,lib_core=info,warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Env(#[from] envs::Error),

    #[error("CRM_API_URL must start with http:// or https:// (got {0})")]
    BadApiUrl(String),

    #[error("CRM_HTTP_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// API base URL, without a trailing slash
    pub api_url: String,
    /// Where the auth token persists between runs
    pub token_file: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the environment (and `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_url = normalize_base_url(&get_env_or("CRM_API_URL", DEFAULT_API_URL))?;
        let timeout_secs: u64 = get_env_parse_or("CRM_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_url,
            token_file: PathBuf::from(get_env_or("CRM_TOKEN_FILE", DEFAULT_TOKEN_FILE)),
            timeout: Duration::from_secs(timeout_secs),
            log_dir: PathBuf::from(get_env_or("CRM_LOG_DIR", DEFAULT_LOG_DIR)),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
        })
    }
}

/// Trim whitespace and trailing slashes; the scheme must be http(s).
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::BadApiUrl(raw.to_string()));
    }
    Ok(url.to_string())
}
