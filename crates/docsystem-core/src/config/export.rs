//! Object export configuration.

use serde::{Deserialize, Serialize};

/// Settings for exporting the filtered system-object view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the CLI writes export files into.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Format used when a request does not name one: `"json"` or `"csv"`.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            default_format: default_format(),
        }
    }
}

fn default_directory() -> String {
    "data/exports".to_string()
}

fn default_format() -> String {
    "json".to_string()
}
