//! Page modules

pub mod clients;
pub mod dashboard;
pub mod leads;
pub mod login;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use leads::LeadsPage;
pub use login::LoginPage;
