//! Request bodies with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Login form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Account e-mail.
    #[validate(email(message = "Введите корректный email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Введите пароль"))]
    pub password: String,
}

/// Registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account e-mail.
    #[validate(email(message = "Введите корректный email"))]
    pub email: String,
    /// Password. Minimum length is configurable and checked by the controller.
    #[validate(length(min = 1, message = "Введите пароль"))]
    pub password: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Confirmation of the code e-mailed after registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    /// Account e-mail.
    #[validate(email(message = "Введите корректный email"))]
    pub email: String,
    /// Six-digit code.
    #[validate(length(equal = 6, message = "Код должен содержать 6 цифр"))]
    pub code: String,
}

/// Password reset, in two steps.
///
/// Step one sends only `email` and triggers a code. Step two sends
/// `email`, `code` and `new_password` together.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_reset_step"))]
pub struct ResetPasswordRequest {
    /// Account e-mail.
    #[validate(email(message = "Введите корректный email"))]
    pub email: String,
    /// Code from the reset e-mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Replacement password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl ResetPasswordRequest {
    /// Whether this is the confirming second step.
    pub fn is_confirmation(&self) -> bool {
        self.code.is_some()
    }
}

fn validate_reset_step(req: &ResetPasswordRequest) -> Result<(), ValidationError> {
    if req.code.is_some() != req.new_password.is_some() {
        let mut err = ValidationError::new("reset_step");
        err.message = Some("Код и новый пароль передаются вместе".into());
        return Err(err);
    }
    Ok(())
}

/// Token refresh.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token issued at login.
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Logout. The token is optional so a client with a broken session can
/// still ask the backend to forget it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LogoutRequest {
    /// Refresh token to revoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}
