//! System objects table command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docsystem_core::error::AppError;
use docsystem_core::types::Selector;
use docsystem_entity::object::ObjectStatus;
use docsystem_service::ObjectQuery;
use docsystem_service::objects::ObjectRow;

use crate::output::{self, OutputFormat};

/// Filters shared by `objects` and `export`
#[derive(Debug, Clone, Args)]
pub struct ObjectFilterArgs {
    /// Search in names and authors
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Object type (any value; `all` disables the filter)
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: Selector<String>,

    /// Status: all, active, beta, deprecated
    #[arg(short, long, default_value = "all")]
    pub status: Selector<ObjectStatus>,
}

impl ObjectFilterArgs {
    /// Query for the object table and export.
    pub fn to_query(&self) -> ObjectQuery {
        ObjectQuery::new(self.query.as_str(), self.kind.clone(), self.status.clone())
    }
}

/// Arguments for the objects command
#[derive(Debug, Args)]
pub struct ObjectsArgs {
    #[command(flatten)]
    pub filters: ObjectFilterArgs,
}

/// Object display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ObjectTableRow {
    #[tabled(rename = "Название")]
    name: String,
    #[tabled(rename = "Тип")]
    kind: String,
    #[tabled(rename = "Версия")]
    version: String,
    #[tabled(rename = "Статус")]
    status: String,
    #[tabled(rename = "Изменён")]
    last_modified: String,
    #[tabled(rename = "Автор")]
    author: String,
}

impl From<&ObjectRow> for ObjectTableRow {
    fn from(row: &ObjectRow) -> Self {
        Self {
            name: row.name.clone(),
            kind: row.kind.clone(),
            version: row.version.clone(),
            status: row.status_label.text.to_string(),
            last_modified: row.last_modified.format("%d.%m.%Y").to_string(),
            author: row.author.clone(),
        }
    }
}

/// Execute the objects command
pub async fn execute(
    args: &ObjectsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;
    let page = state.objects.list(args.filters.to_query());

    match format {
        OutputFormat::Json => output::print_json(&page),
        OutputFormat::Table => {
            let items = &page.listing.items;
            let rows: Vec<ObjectTableRow> = items.iter().map(ObjectTableRow::from).collect();
            output::print_table(
                &rows,
                page.listing.empty_message.unwrap_or("No results found."),
            );
            println!("{}", page.summary);
        }
    }

    Ok(())
}
