//! The authentication backend capability.

pub mod http;
pub mod memory;

use std::fmt;

use async_trait::async_trait;

use docsystem_core::result::AppResult;
use docsystem_entity::auth::{
    AuthMessage, AuthSession, Credentials, LogoutRequest, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};

pub use http::HttpAuthGateway;
pub use memory::InMemoryAuthGateway;

/// One operation of the auth backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthAction {
    Login,
    Register,
    VerifyEmail,
    Refresh,
    Logout,
    ResetPassword,
}

impl AuthAction {
    /// Value of the `action` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::VerifyEmail => "verify-email",
            Self::Refresh => "refresh",
            Self::Logout => "logout",
            Self::ResetPassword => "reset-password",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque authentication backend.
///
/// Implementations report backend refusals with the backend's own
/// message, which is shown to the user as is.
#[async_trait]
pub trait AuthGateway: Send + Sync + fmt::Debug {
    /// Short identifier for logs, e.g. `"http"` or `"memory"`.
    fn gateway_type(&self) -> &str;

    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession>;

    async fn register(&self, request: &RegisterRequest) -> AppResult<AuthMessage>;

    async fn verify_email(&self, request: &VerifyEmailRequest) -> AppResult<AuthMessage>;

    async fn refresh(&self, request: &RefreshRequest) -> AppResult<AuthSession>;

    async fn logout(&self, request: &LogoutRequest) -> AppResult<AuthMessage>;

    /// Request a reset code, or confirm one together with a new password.
    async fn reset_password(&self, request: &ResetPasswordRequest) -> AppResult<AuthMessage>;
}
