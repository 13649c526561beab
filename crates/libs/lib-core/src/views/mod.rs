//! # View Models
//!
//! One state struct per page. Actions return [`Command`](crate::events::Command)s,
//! results come back through [`Screen::apply`](crate::events::Screen::apply).

pub mod clients;
pub mod dashboard;
pub mod lead_form;
pub mod leads;
pub mod login;

pub use clients::ClientsView;
pub use dashboard::{stat_cards, DashboardState, DashboardView, StatCard};
pub use lead_form::{FieldErrors, LeadField, LeadForm};
pub use leads::{FormMode, LeadsView, StatusFilter};
pub use login::LoginView;
