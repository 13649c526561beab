//! Auth state management

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::{guard, AuthSession, Navigation, Route};

use crate::services::storage::LocalStorageTokenStore;

/// Session handle plus a signal that mirrors whether it holds a token, so
/// the navbar and route guard re-render on login and logout.
#[derive(Clone)]
pub struct AuthContext {
    session: AuthSession,
    authenticated: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(session: AuthSession) -> Self {
        let authenticated = RwSignal::new(session.is_authenticated());
        Self {
            session,
            authenticated,
        }
    }

    pub fn session(&self) -> AuthSession {
        self.session.clone()
    }

    /// Reactive
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Reactive guard decision for `route`.
    pub fn navigation(&self, route: Route) -> Navigation {
        self.authenticated.track();
        guard(route, &self.session)
    }

    /// Pick up a login or logout done through the session directly.
    pub fn sync(&self) {
        self.authenticated.set(self.session.is_authenticated());
    }

    pub fn logout(&self) {
        self.session.logout();
        self.sync();
    }
}

/// Restore the session from localStorage and share it.
pub fn provide_auth_context() -> AuthContext {
    let session = AuthSession::new(Arc::new(LocalStorageTokenStore));
    let context = AuthContext::new(session);
    provide_context(context.clone());
    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
