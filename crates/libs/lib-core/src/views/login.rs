//! # Login View
//!
//! Email/password form. On success the token goes into the [`AuthSession`] and
//! the view asks to navigate to the leads page.

use crate::events::{Command, Event, Screen};
use crate::router::{Route, HOME_AFTER_LOGIN};
use crate::session::AuthSession;

const ERR_LOGIN: &str = "Login failed";

#[derive(Clone)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
    redirect: Option<Route>,
    session: AuthSession,
}

impl LoginView {
    pub fn new(session: AuthSession) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
            redirect: None,
            session,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Credentials go out as the `username`/`password` form fields; the email is
    /// the username. Ignored while a login is in flight.
    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        tracing::info!(email = %self.email, "Attempting login");
        Some(Command::Login {
            username: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Pending navigation after a successful login, consumed once.
    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }
}

impl std::fmt::Debug for LoginView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginView")
            .field("email", &self.email)
            .field("error", &self.error)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl Screen for LoginView {
    fn apply(&mut self, event: Event) -> Option<Command> {
        if let Event::LoggedIn(result) = event {
            self.loading = false;
            match result {
                Ok(token) => {
                    self.session.login(token.access_token);
                    self.password.clear();
                    self.redirect = Some(HOME_AFTER_LOGIN);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    self.error = Some(e.user_message(ERR_LOGIN));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::events::drive;
    use crate::router::{guard, Navigation};
    use crate::testing::{FakeCrm, ADMIN_EMAIL, ADMIN_PASSWORD};

    #[tokio::test]
    async fn test_login_unlocks_protected_routes() {
        let api = FakeCrm::new();
        let session = AuthSession::in_memory();
        assert!(matches!(guard(Route::Leads, &session), Navigation::Redirect { to: Route::Login, .. }));

        let mut view = LoginView::new(session.clone());
        view.email = ADMIN_EMAIL.to_string();
        view.password = ADMIN_PASSWORD.to_string();
        let cmd = view.submit().unwrap();
        assert!(view.submit().is_none(), "second submit ignored while in flight");
        drive(&api, &mut view, cmd).await;

        assert_eq!(session.token().as_deref(), Some("fake-jwt"));
        assert_eq!(view.take_redirect(), Some(Route::Leads));
        assert_eq!(view.take_redirect(), None);
        assert_eq!(guard(Route::Leads, &session), Navigation::Render(Route::Leads));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_form() {
        let api = FakeCrm::new();
        let session = AuthSession::in_memory();
        let mut view = LoginView::new(session.clone());
        view.email = ADMIN_EMAIL.to_string();
        view.password = "wrong".to_string();

        let cmd = view.submit().unwrap();
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.error(), Some("Incorrect email or password"));
        assert_eq!(view.password, "wrong");
        assert!(!view.is_loading());
        assert!(!session.is_authenticated());
        assert_eq!(view.take_redirect(), None);
    }

    #[tokio::test]
    async fn test_transport_error_uses_generic_message() {
        let api = FakeCrm::new();
        api.fail_next(AppError::Network("connection refused".to_string()));
        let mut view = LoginView::new(AuthSession::in_memory());

        let cmd = view.submit().unwrap();
        drive(&api, &mut view, cmd).await;
        assert_eq!(view.error(), Some("Login failed"));
    }
}
