//! Serialized export payloads handed to an [`ExportSink`](crate::traits::ExportSink).

use serde::{Deserialize, Serialize};

/// A fully serialized export, ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Suggested file name, including extension.
    pub filename: String,
    /// MIME type of `bytes`.
    pub content_type: String,
    /// Number of records contained in the document.
    pub record_count: usize,
    /// Serialized content.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ExportDocument {
    /// Size of the serialized content in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the serialized content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Where a sink put a delivered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    /// Sink-specific location (a file path, `memory:<name>`, ...).
    pub location: String,
    /// Bytes written.
    pub bytes_written: usize,
}
