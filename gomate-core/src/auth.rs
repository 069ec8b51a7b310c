//! Auth slice.
//!
//! Two states: unauthenticated (initial) and authenticated. There is no
//! "logging in" state; callers track in-flight requests themselves.

use gomate_types::{Session, User};

/// Authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Whether a session is active.
    pub authenticated: bool,
    /// The signed-in user.
    pub user: Option<User>,
    /// Opaque bearer token.
    pub token: Option<String>,
}

/// Transitions of the auth slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Credentials were accepted (login or registration).
    LoginSucceeded(Session),
    /// A persisted session was found on start-up.
    Restored(Session),
    /// The user signed out.
    LoggedOut,
}

impl AuthState {
    /// Create the initial, unauthenticated state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the new state.
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginSucceeded(session) | AuthAction::Restored(session) => Self {
                authenticated: true,
                user: Some(session.user),
                token: Some(session.token),
            },
            AuthAction::LoggedOut => Self::new(),
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<Session> {
        match (&self.user, &self.token) {
            (Some(user), Some(token)) if self.authenticated => Some(Session {
                user: user.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}
