//! Global search command.

use clap::Args;

use docsystem_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in releases and objects
    pub query: String,
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;
    let results = state.home.search(&args.query)?;

    if format == OutputFormat::Json {
        output::print_json(&results);
        return Ok(());
    }

    if results.total == 0 {
        output::print_warning("Ничего не найдено");
        return Ok(());
    }

    for card in &results.versions {
        println!("[версия] {}  {}", card.display_version, card.title);
    }
    for row in &results.objects {
        println!("[объект] {}  ({}, {})", row.name, row.kind, row.author);
    }
    println!("\nНайдено: {}", results.total);

    Ok(())
}
