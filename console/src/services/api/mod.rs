//! # API Services
//!
//! REST client for the lead tracking backend, split by resource.
//!
//! ## Modules
//!
//! - [`client`]: [`ApiClient`] plus shared request/response handling
//! - [`auth`]: form-encoded login
//! - [`leads`]: lead CRUD and conversion
//! - [`clients`]: client list
//! - [`stats`]: dashboard counters
//!
//! Every call except login carries `Authorization: Bearer <token>` taken from the
//! [`AuthSession`](lib_core::AuthSession) the client was built with.

pub mod auth;
pub mod client;
pub mod clients;
pub mod leads;
pub mod stats;

pub use client::ApiClient;
