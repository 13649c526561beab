//! # Auth Session
//!
//! Holds the bearer token for the running app and persists it through a
//! [`TokenStore`] so a reload (or a new console run) starts signed in.
//!
//! [`AuthSession`] is a cheap handle: clones share the same token. The API client,
//! the route guard and the login view all receive a clone at construction.
//!
//! ```rust
//! use lib_core::session::AuthSession;
//!
//! let session = AuthSession::in_memory();
//! assert!(!session.is_authenticated());
//!
//! session.login("eyJhbGciOi...");
//! assert!(session.is_authenticated());
//! assert_eq!(session.bearer().as_deref(), Some("Bearer eyJhbGciOi..."));
//!
//! session.logout();
//! assert!(session.token().is_none());
//! ```

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;

/// Persistence backend for the auth token.
pub trait TokenStore: Send + Sync {
    /// Previously saved token, if any.
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Token store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if a previous run had logged in.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Current authentication state.
#[derive(Clone)]
pub struct AuthSession {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl AuthSession {
    /// Create a session, restoring any token the store already holds.
    ///
    /// A store that fails to load starts the session signed out.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let restored = match store.load() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore auth token");
                None
            }
        };
        if restored.is_some() {
            tracing::debug!("Restored auth token from store");
        }

        Self {
            token: Arc::new(RwLock::new(restored)),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Store the token and mark the session authenticated.
    ///
    /// Persistence failures are logged; the in-memory session still changes.
    pub fn login(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.store.save(&token) {
            tracing::warn!(error = %e, "Failed to persist auth token");
        }
        *self.token.write() = Some(token);
        tracing::info!("Session authenticated");
    }

    /// Forget the token in memory and in the store.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted auth token");
        }
        *self.token.write() = None;
        tracing::info!("Session logged out");
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> Result<Option<String>> {
            Err(AppError::Storage("unreadable".to_string()))
        }
        fn save(&self, _token: &str) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }
        fn clear(&self) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = AuthSession::new(store.clone());

        session.login("abc");
        assert!(session.is_authenticated());
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_restores_token_from_store() {
        let session = AuthSession::new(Arc::new(MemoryTokenStore::with_token("saved")));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer saved"));
    }

    #[test]
    fn test_blank_stored_token_is_signed_out() {
        let session = AuthSession::new(Arc::new(MemoryTokenStore::with_token("  ")));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let session = AuthSession::in_memory();
        let guard_view = session.clone();
        session.login("shared");
        assert!(guard_view.is_authenticated());
    }

    #[test]
    fn test_store_failures_do_not_block_state_changes() {
        let session = AuthSession::new(Arc::new(BrokenStore));
        assert!(!session.is_authenticated());

        session.login("abc");
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
    }
}
