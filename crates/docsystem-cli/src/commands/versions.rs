//! Release history commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docsystem_core::error::AppError;
use docsystem_core::types::Selector;
use docsystem_entity::version::VersionType;
use docsystem_service::{VersionCard, VersionQuery};

use crate::output::{self, OutputFormat};

/// Arguments for the versions command
#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Show one release in full (with or without the `v` prefix)
    pub version: Option<String>,

    /// Search in titles and version numbers
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Release type: all, major, minor, patch
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: Selector<VersionType>,
}

/// Release display row for table output
#[derive(Debug, Serialize, Tabled)]
struct VersionRow {
    #[tabled(rename = "Версия")]
    version: String,
    #[tabled(rename = "Дата")]
    date: String,
    #[tabled(rename = "Тип")]
    kind: String,
    #[tabled(rename = "Название")]
    title: String,
    #[tabled(rename = "Файлы")]
    files: usize,
}

impl From<&VersionCard> for VersionRow {
    fn from(card: &VersionCard) -> Self {
        Self {
            version: card.display_version.clone(),
            date: card.display_date.clone(),
            kind: card.label.text.to_string(),
            title: card.title.clone(),
            files: card.files.len(),
        }
    }
}

/// Execute the versions command
pub async fn execute(
    args: &VersionsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;

    if let Some(version) = &args.version {
        let card = state.documentation.find(version)?;
        match format {
            OutputFormat::Json => output::print_json(&card),
            OutputFormat::Table => print_card(&card),
        }
        return Ok(());
    }

    let listing = state
        .documentation
        .list(VersionQuery::new(args.query.as_str(), args.kind.clone()));

    match format {
        OutputFormat::Json => output::print_json(&listing),
        OutputFormat::Table => {
            let rows: Vec<VersionRow> = listing.items.iter().map(VersionRow::from).collect();
            output::print_table(&rows, listing.empty_message.unwrap_or("No results found."));
        }
    }

    Ok(())
}

fn print_card(card: &VersionCard) {
    println!("{}  {}", card.display_version, card.title);
    output::print_kv("Дата", &card.display_date);
    output::print_kv("Тип", &card.label.text);
    output::print_kv("Описание", &card.description);

    if !card.changes.is_empty() {
        println!("\nИзменения:");
        for change in &card.changes {
            println!("  • {change}");
        }
    }

    if !card.files.is_empty() {
        println!("\nФайлы:");
        for file in &card.files {
            println!("  [{}] {} ({})", file.kind, file.name, file.size);
        }
    }
}
