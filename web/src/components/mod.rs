//! UI Components

pub mod banner;
pub mod navbar;
pub mod protected;
pub mod stat_card;

pub use banner::Banner;
pub use navbar::Navbar;
pub use protected::Protected;
pub use stat_card::StatCard;
