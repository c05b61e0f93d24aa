//! CLI command definitions and dispatch.

pub mod auth;
pub mod config;
pub mod contacts;
pub mod export;
pub mod objects;
pub mod routes;
pub mod search;
pub mod serve;
pub mod versions;

use clap::{Parser, Subcommand};

use docsystem_api::AppState;
use docsystem_core::config::AppConfig;
use docsystem_core::error::AppError;
use docsystem_dataset::Dataset;

use crate::output::OutputFormat;

/// DocSystem: product documentation, release history and system objects
#[derive(Debug, Parser)]
#[command(name = "docsystem", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),
    /// Release history
    Versions(versions::VersionsArgs),
    /// System objects table
    Objects(objects::ObjectsArgs),
    /// Export the filtered objects table to a file
    Export(export::ExportArgs),
    /// Contact channels and office
    Contacts,
    /// Search releases and objects
    Search(search::SearchArgs),
    /// Navigation items, or resolve a path
    Routes(routes::RoutesArgs),
    /// Sign in, register, verify e-mail, reset password
    Auth(auth::AuthArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Versions(args) => versions::execute(args, &self.config, self.format).await,
            Commands::Objects(args) => objects::execute(args, &self.config, self.format).await,
            Commands::Export(args) => export::execute(args, &self.config).await,
            Commands::Contacts => contacts::execute(&self.config, self.format).await,
            Commands::Search(args) => search::execute(args, &self.config, self.format).await,
            Commands::Routes(args) => routes::execute(args, &self.config, self.format).await,
            Commands::Auth(args) => auth::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    tracing::debug!(config_path, "Loading configuration");
    AppConfig::load_from(config_path)
}

/// Helper: seed the dataset and wire every service, as the server does
pub fn app_state(config_path: &str) -> Result<AppState, AppError> {
    let config = load_config(config_path)?;
    let dataset = Dataset::seeded()?;
    let gateway = docsystem_auth::gateway_from_config(&config.auth)?;
    Ok(AppState::new(config, dataset, gateway))
}
