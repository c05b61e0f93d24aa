//! Observable session state.

use serde::Serialize;

use docsystem_entity::auth::AuthUser;

/// Snapshot of the session, as a login form or profile view sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    /// Signed-in user.
    pub user: Option<AuthUser>,
    /// Whether a request is in flight.
    pub is_loading: bool,
    /// Message of the last failed operation.
    pub last_error: Option<String>,
    #[serde(skip)]
    pub(crate) access_token: Option<String>,
    #[serde(skip)]
    pub(crate) refresh_token: Option<String>,
}

impl AuthState {
    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    /// Current bearer token.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
