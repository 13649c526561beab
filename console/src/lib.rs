//! # Lead Tracker Console - Library Root
//!
//! Interactive terminal front-end for the lead tracking API. It runs the same
//! view models as the browser app (`lib-core`), backed by a `reqwest` client and
//! a token file on disk.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  shell       - command parsing and rendering │
//! │  lib-core    - views, route guard, session   │
//! │  services    - reqwest ApiClient, token file │
//! └──────────────────────────────────────────────┘
//!                       │ HTTP (JSON, form login)
//!                       ▼
//!             ┌──────────────────┐
//!             │  Lead API server │
//!             └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`config`]: settings read from the environment (`CRM_*` variables)
//! - [`logger`]: daily rolling log file and panic hook
//! - [`services`]: [`ApiClient`](services::api::ApiClient) and
//!   [`FileTokenStore`](services::token_file::FileTokenStore)
//! - [`shell`]: the command loop over the shared views

pub mod config;
pub mod logger;
pub mod services;
pub mod shell;

pub use config::{ConfigError, ConsoleConfig};
pub use services::api::ApiClient;
pub use services::token_file::FileTokenStore;
pub use shell::Shell;
