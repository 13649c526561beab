//! # Centralized Error Handling
//!
//! This module defines [`AppError`], the error type every front-end operation
//! returns. It follows the `thiserror` pattern and keeps just enough structure for
//! the UI to decide what to show.
//!
//! ## Error Categories
//!
//! - [`Http`](AppError::Http): the API answered with a non-2xx status. Carries the
//!   status code and the server's `detail` message when one was a string.
//! - [`Network`](AppError::Network): the request never produced a response
//!   (connection refused, DNS, timeout, CORS).
//! - [`Decode`](AppError::Decode): a 2xx response whose body did not match the
//!   expected shape.
//! - [`Validation`](AppError::Validation): local input rejected before sending.
//! - [`Storage`](AppError::Storage): the token store could not be read or written.
//!
//! Authentication failures (401) are plain [`Http`](AppError::Http) errors; they
//! surface as a banner like any other failure.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::AppError;
//!
//! let err = AppError::Http { status: 404, detail: Some("Lead not found".to_string()) };
//! assert_eq!(err.user_message("Delete failed"), "Lead not found");
//!
//! let err = AppError::Network("connection refused".to_string());
//! assert_eq!(err.user_message("Delete failed"), "Delete failed");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Front-end error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Non-success HTTP status from the API.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    /// Transport failure, no response received.
    #[error("Network error: {0}")]
    Network(String),

    /// Successful response with an unexpected body.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input rejected locally.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Token persistence failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Server-provided `detail`, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, for [`AppError::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Banner text: the server `detail` when present, otherwise `fallback`.
    ///
    /// Local validation errors carry their own message and use it instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            other => other.detail().unwrap_or(fallback).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = AppError::Http {
            status: 400,
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Save failed"), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_fallbacks() {
        let no_detail = AppError::Http { status: 500, detail: None };
        assert_eq!(no_detail.user_message("Failed to load leads"), "Failed to load leads");

        let decode = AppError::Decode("missing field `id`".to_string());
        assert_eq!(decode.user_message("Save failed"), "Save failed");

        let validation = AppError::Validation("Name is required".to_string());
        assert_eq!(validation.user_message("Save failed"), "Name is required");
    }

    #[test]
    fn test_unauthorized() {
        let err = AppError::Http {
            status: 401,
            detail: Some("Invalid or expired token".to_string()),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: Invalid or expired token");
        assert!(!AppError::Network("timeout".to_string()).is_unauthorized());
    }
}
