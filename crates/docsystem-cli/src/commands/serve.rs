//! Start the DocSystem HTTP API server.

use clap::Args;

use docsystem_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut state = super::app_state(config_path)?;

    let mut config = (*state.config).clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting DocSystem server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Auth: {}", state.auth_gateway.gateway_type());

    state.config = std::sync::Arc::new(config);
    docsystem_api::serve(state).await
}
