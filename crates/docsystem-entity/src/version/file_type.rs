//! Attachment file type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document format of a release attachment. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document.
    Pdf,
    /// Spreadsheet.
    Xls,
    /// Word document.
    Doc,
}

impl FileType {
    /// Return the file type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xls => "xls",
            Self::Doc => "doc",
        }
    }

    /// Icon name the presentation layer renders next to the download button.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pdf | Self::Doc => "FileText",
            Self::Xls => "FileSpreadsheet",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
