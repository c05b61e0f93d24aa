//! External authentication service configuration.

use serde::{Deserialize, Serialize};

/// Which auth gateway implementation backs the auth endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Forward every call to the remote auth function over HTTP.
    Http,
    /// In-process fake backend (local development and tests).
    #[default]
    Memory,
}

/// Authentication gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: AuthProvider,
    /// Base URL of the remote auth function. The operation is selected by
    /// an `action` query parameter appended to this URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Minimum password length enforced before registration or reset.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProvider::default(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_base_url() -> String {
    "https://functions.poehali.dev/8f24641f-6bd9-4176-b9ee-a4b6765409d2".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_password_min() -> usize {
    8
}
