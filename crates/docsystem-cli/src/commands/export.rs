//! Export the filtered objects table to a file.

use clap::Args;

use docsystem_core::error::AppError;
use docsystem_service::{ExportFormat, FileExportSink};

use super::objects::ObjectFilterArgs;
use crate::output;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: ObjectFilterArgs,

    /// json or csv (defaults to `export.default_format`)
    #[arg(long = "file-format")]
    pub export_format: Option<ExportFormat>,

    /// Target directory (defaults to `export.directory`)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Execute the export command
pub async fn execute(args: &ExportArgs, config_path: &str) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;

    let format = match args.export_format {
        Some(format) => format,
        None => state.config.export.default_format.parse()?,
    };
    let directory = args
        .output
        .clone()
        .unwrap_or_else(|| state.config.export.directory.clone());

    let sink = FileExportSink::new(directory);
    let receipt = state
        .export
        .export_to(&sink, args.filters.to_query(), format)
        .await?;

    output::print_success(&format!(
        "Exported to '{}' ({} bytes)",
        receipt.location, receipt.bytes_written
    ));
    Ok(())
}
