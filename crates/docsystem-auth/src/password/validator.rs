//! Password policy for new passwords.

use docsystem_core::config::AuthConfig;
use docsystem_core::error::AppError;

/// Enforces the configured minimum length on registration and reset.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_min_length(config.password_min_length)
    }

    /// Creates a validator with an explicit minimum.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Minimum length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Пароль должен содержать не менее {} символов",
                self.min_length
            )));
        }
        Ok(())
    }
}
