//! DocSystem Server — product documentation portal
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use docsystem_api::AppState;
use docsystem_core::config::AppConfig;
use docsystem_core::error::AppError;
use docsystem_dataset::Dataset;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from an explicit file or the environment overlay
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("DOCSYSTEM_CONFIG") {
        Ok(path) => AppConfig::load_from(&path),
        Err(_) => {
            let env =
                std::env::var("DOCSYSTEM_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocSystem v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Seed catalogs ────────────────────────────────────
    let dataset = Dataset::seeded()?;
    tracing::info!(
        versions = dataset.versions().len(),
        objects = dataset.objects().len(),
        channels = dataset.contacts().channels.len(),
        "Catalogs loaded"
    );

    // ── Step 2: Auth gateway ─────────────────────────────────────
    let gateway = docsystem_auth::gateway_from_config(&config.auth)?;
    tracing::info!("Auth gateway: {}", gateway.gateway_type());

    // ── Step 3: Services ─────────────────────────────────────────
    let state = AppState::new(config, dataset, gateway);

    // ── Step 4: Serve ────────────────────────────────────────────
    docsystem_api::serve(state).await?;

    tracing::info!("DocSystem server stopped");
    Ok(())
}
