//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the lead tracking API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login token response and error body
//! - [`lead`] - Lead records, status, create payload and edit patch
//! - [`client`] - Client records
//! - [`stats`] - Dashboard statistics
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=admin%40example.com&password=admin123
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "token_type": "bearer" }
//! ```
//!
//! ```text
//! PUT /leads/5
//! Authorization: Bearer eyJhbGciOi...
//!
//! { "phone": "+44 20 7946 0000" }
//! ```

pub mod auth;
pub mod client;
pub mod lead;
pub mod stats;

pub use auth::*;
pub use client::*;
pub use lead::*;
pub use stats::*;
