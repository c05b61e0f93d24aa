//! Success payloads returned by the authentication service.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend identifier.
    pub id: i64,
    /// Account e-mail.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the e-mail address has been confirmed.
    #[serde(default)]
    pub email_verified: bool,
}

/// Result of a successful login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Signed-in user.
    pub user: AuthUser,
    /// Short-lived bearer token.
    pub access_token: String,
    /// Long-lived token used by `refresh` and `logout`.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Human-readable confirmation for flows that do not sign the user in
/// (registration, e-mail verification, password reset, logout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMessage {
    /// Message shown above the login form.
    pub message: String,
}

impl AuthMessage {
    /// Create a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
