//! # CRM Front-end Core
//!
//! Everything the browser and console front-ends share: the API seam, the auth
//! session, routing rules and the page view models.
//!
//! ## Modules
//!
//! - **[`error`]**: [`AppError`] and the `Result` alias
//! - **[`service`]**: [`CrmApi`], the REST API trait each front-end implements
//! - **[`session`]**: [`AuthSession`] and pluggable [`TokenStore`]s
//! - **[`router`]**: routes, the route guard and navigation links
//! - **[`events`]**: [`Command`]/[`Event`] plumbing between views and the API
//! - **[`views`]**: Login, Leads, Clients and Dashboard view models
//!
//! ## Flow
//!
//! ```rust,no_run
//! use lib_core::events::drive;
//! use lib_core::views::LeadsView;
//! use lib_core::CrmApi;
//!
//! async fn open_leads(api: &dyn CrmApi) -> LeadsView {
//!     let mut view = LeadsView::new();
//!     let cmd = view.mount();
//!     drive(api, &mut view, cmd).await;
//!     view
//! }
//! ```

pub mod error;
pub mod events;
pub mod router;
pub mod service;
pub mod session;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use events::{drive, execute, Command, Event, Screen};
pub use router::{guard, nav_links, Navigation, Route};
pub use service::CrmApi;
pub use session::{AuthSession, MemoryTokenStore, TokenStore};
