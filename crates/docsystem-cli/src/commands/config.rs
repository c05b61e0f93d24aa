//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use docsystem_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("server", &config.server.bind_address());
                    output::print_kv("auth.provider", &format!("{:?}", config.auth.provider));
                    output::print_kv("auth.base_url", &config.auth.base_url);
                    output::print_kv(
                        "auth.timeout_seconds",
                        &config.auth.timeout_seconds.to_string(),
                    );
                    output::print_kv("export.directory", &config.export.directory);
                    output::print_kv("export.default_format", &config.export.default_format);
                    output::print_kv("logging.level", &config.logging.level);
                    output::print_kv("logging.format", &config.logging.format);
                }
            }
        }
        ConfigCommand::Validate => match super::app_state(config_path) {
            Ok(state) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                println!("  Server: {}", state.config.server.bind_address());
                println!("  Auth: {}", state.auth_gateway.gateway_type());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
