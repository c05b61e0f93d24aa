//! # docsystem-auth
//!
//! Authentication for DocSystem. The backend is opaque: every operation
//! goes through the [`AuthGateway`] capability, which has an HTTP
//! implementation for the remote auth function and an in-memory one for
//! tests and local development.
//!
//! ## Modules
//!
//! - `gateway`: the gateway trait and its two implementations
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `validate`: request checks run before any backend call
//! - `controller`: client-side session state with a single in-flight request

pub mod controller;
pub mod gateway;
pub mod password;
pub mod validate;

pub use controller::{AuthController, AuthState};
pub use gateway::{AuthAction, AuthGateway, HttpAuthGateway, InMemoryAuthGateway};
pub use password::{PasswordHasher, PasswordValidator};
pub use validate::RequestValidator;

use std::sync::Arc;

use docsystem_core::config::{AuthConfig, AuthProvider};
use docsystem_core::result::AppResult;

/// Build the gateway selected by configuration.
pub fn gateway_from_config(config: &AuthConfig) -> AppResult<Arc<dyn AuthGateway>> {
    let gateway: Arc<dyn AuthGateway> = match config.provider {
        AuthProvider::Http => Arc::new(HttpAuthGateway::new(config)?),
        AuthProvider::Memory => Arc::new(InMemoryAuthGateway::new()),
    };
    tracing::info!(provider = gateway.gateway_type(), "Auth gateway ready");
    Ok(gateway)
}
