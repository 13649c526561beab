//! # Routes and Route Guard
//!
//! The four pages of the app, the guard that keeps signed-out users on the login
//! page, and the links the navigation shell shows.

use crate::session::AuthSession;

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Leads,
    Clients,
    Dashboard,
}

/// Where a successful login lands.
pub const HOME_AFTER_LOGIN: Route = Route::Leads;

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Leads => "/leads",
            Route::Clients => "/clients",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Navigation label
    pub const fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Leads => "Leads",
            Route::Clients => "Clients",
            Route::Dashboard => "Dashboard",
        }
    }

    pub const fn is_protected(self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Resolve a location path. `/` is the leads page; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(HOME_AFTER_LOGIN),
            "/login" => Some(Route::Login),
            "/leads" => Some(Route::Leads),
            "/clients" => Some(Route::Clients),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Guard decision for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested page.
    Render(Route),
    /// Go elsewhere. `replace` swaps the current history entry so Back does not
    /// return to the guarded page.
    Redirect { to: Route, replace: bool },
}

/// Decide whether `route` may render for the given session.
pub fn guard(route: Route, session: &AuthSession) -> Navigation {
    if route.is_protected() && !session.is_authenticated() {
        tracing::debug!(requested = route.path(), "Redirecting unauthenticated navigation");
        return Navigation::Redirect {
            to: Route::Login,
            replace: true,
        };
    }
    Navigation::Render(route)
}

/// Links shown by the navigation shell.
pub fn nav_links(authenticated: bool) -> &'static [Route] {
    if authenticated {
        &[Route::Dashboard, Route::Leads, Route::Clients]
    } else {
        &[Route::Login]
    }
}
