//! # Services
//!
//! HTTP access to the lead API and on-disk persistence of the auth token.

pub mod api;
pub mod token_file;
