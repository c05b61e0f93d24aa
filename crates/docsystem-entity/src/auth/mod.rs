//! Payloads exchanged with the external authentication service.

pub mod request;
pub mod response;

pub use request::{
    Credentials, LogoutRequest, RefreshRequest, RegisterRequest, ResetPasswordRequest,
    VerifyEmailRequest,
};
pub use response::{AuthMessage, AuthSession, AuthUser};
