//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or `empty_message` when there are none.
pub fn print_table<T: Tabled>(rows: &[T], empty_message: &str) {
    if rows.is_empty() {
        println!("{empty_message}");
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(items, "No results found."),
        OutputFormat::Json => print_json(&items),
    }
}

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Failed to serialize output: {e}")),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
