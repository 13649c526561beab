//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CRM front-ends (console/web) and the
//! lead tracking REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login token and error body DTOs
//!   - **[`dto::lead`]**: Leads, lead status, create payload and edit patch
//!   - **[`dto::client`]**: Clients created by converting a lead
//!   - **[`dto::stats`]**: Dashboard aggregate counts
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Optional response fields deserialize from `null` or a missing key
//! - The edit patch only carries the fields that changed
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::lead::{Lead, LeadStatus};
//!
//! let lead: Lead = serde_json::from_str(
//!     r#"{"id": 1, "name": "Ada", "email": "ada@example.com", "phone": null, "status": "converted"}"#,
//! ).unwrap();
//!
//! assert_eq!(lead.status(), Some(LeadStatus::Converted));
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
