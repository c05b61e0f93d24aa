//! Request checks shared by the session controller and the HTTP API.

use validator::Validate;

use docsystem_core::config::AuthConfig;
use docsystem_core::result::AppResult;
use docsystem_entity::auth::{
    Credentials, LogoutRequest, RefreshRequest, RegisterRequest, ResetPasswordRequest,
    VerifyEmailRequest,
};

use crate::password::PasswordValidator;

/// Validates auth requests before they reach a gateway.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    passwords: PasswordValidator,
}

impl RequestValidator {
    /// Build a validator with the configured password policy.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            passwords: PasswordValidator::new(config),
        }
    }

    /// Check login credentials.
    pub fn credentials(&self, request: &Credentials) -> AppResult<()> {
        Ok(request.validate()?)
    }

    /// Check a registration, including the password length.
    pub fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        request.validate()?;
        self.passwords.validate(&request.password)
    }

    /// Check an e-mail confirmation.
    pub fn verify_email(&self, request: &VerifyEmailRequest) -> AppResult<()> {
        Ok(request.validate()?)
    }

    /// Check a refresh request.
    pub fn refresh(&self, request: &RefreshRequest) -> AppResult<()> {
        Ok(request.validate()?)
    }

    /// Check a logout request.
    pub fn logout(&self, request: &LogoutRequest) -> AppResult<()> {
        Ok(request.validate()?)
    }

    /// The new password is only checked on the confirming step.
    pub fn reset_password(&self, request: &ResetPasswordRequest) -> AppResult<()> {
        request.validate()?;
        match &request.new_password {
            Some(password) => self.passwords.validate(password),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsystem_core::error::ErrorKind;

    fn validator() -> RequestValidator {
        RequestValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_register_enforces_min_length() {
        let short = RegisterRequest {
            email: "petrov@docsystem.ru".to_string(),
            password: "1234".to_string(),
            name: None,
        };
        let err = validator().register(&short).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let ok = RegisterRequest {
            password: "12345678".to_string(),
            ..short
        };
        assert!(validator().register(&ok).is_ok());
    }

    #[test]
    fn test_reset_checks_password_only_on_confirmation() {
        let request_code = ResetPasswordRequest {
            email: "petrov@docsystem.ru".to_string(),
            code: None,
            new_password: None,
        };
        assert!(validator().reset_password(&request_code).is_ok());

        let confirm = ResetPasswordRequest {
            code: Some("123456".to_string()),
            new_password: Some("short".to_string()),
            ..request_code
        };
        assert!(validator().reset_password(&confirm).is_err());
    }
}
