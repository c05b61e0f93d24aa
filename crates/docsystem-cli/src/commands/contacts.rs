//! Contacts command.

use serde::Serialize;
use tabled::Tabled;

use docsystem_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Contact channel row for table output
#[derive(Debug, Serialize, Tabled)]
struct ChannelRow {
    #[tabled(rename = "Канал")]
    title: String,
    #[tabled(rename = "Контакт")]
    value: String,
    #[tabled(rename = "Ссылка")]
    action: String,
}

/// Execute the contacts command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let state = super::app_state(config_path)?;
    let page = state.contacts.page();

    if format == OutputFormat::Json {
        output::print_json(&page);
        return Ok(());
    }

    let rows: Vec<ChannelRow> = page
        .channels
        .iter()
        .map(|c| ChannelRow {
            title: c.title.clone(),
            value: c.value.clone(),
            action: c.action.clone().unwrap_or_else(|| "—".to_string()),
        })
        .collect();
    output::print_list(&rows, format);

    println!("\n{}", page.office.title);
    output::print_kv("Адрес", &page.office.address);
    output::print_kv("Маршрут", &page.office.route_url);
    output::print_kv(
        "Координаты",
        &format!("{}, {}", page.office.latitude, page.office.longitude),
    );

    Ok(())
}
