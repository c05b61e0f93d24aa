//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that a missing
//! file still yields a runnable configuration.

pub mod app;
pub mod auth;
pub mod export;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, AuthProvider};
pub use self::export::ExportConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`DOCSYSTEM__SERVER__PORT=9090`).
const ENV_PREFIX: &str = "DOCSYSTEM";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// External authentication service settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Object export settings.
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default.toml` with the `config/{env}.toml` overlay and
    /// environment variables prefixed with `DOCSYSTEM`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::build(&["config/default".to_string(), format!("config/{env}")])
    }

    /// Load configuration from an explicit file, still honouring
    /// environment variable overrides.
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        Self::build(&[path.to_string()])
    }

    fn build(files: &[String]) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        for file in files {
            builder = builder.add_source(config::File::with_name(file).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
