//! Navigation and route resolution command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docsystem_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the routes command
#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Resolve this path instead of listing the navigation bar
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct NavRow {
    path: String,
    label: String,
    icon: String,
}

/// Execute the routes command
pub async fn execute(
    args: &RoutesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;

    match &args.path {
        Some(path) => {
            let resolved = state.navigation.resolve(path);
            match format {
                OutputFormat::Json => output::print_json(&resolved),
                OutputFormat::Table => {
                    output::print_kv("Path", &resolved.path);
                    output::print_kv("Route", resolved.route.path());
                    output::print_kv("Title", resolved.title);
                }
            }
        }
        None => {
            let rows: Vec<NavRow> = state
                .navigation
                .items("/")
                .into_iter()
                .map(|link| NavRow {
                    path: link.item.path.to_string(),
                    label: link.item.label.to_string(),
                    icon: link.item.icon.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
