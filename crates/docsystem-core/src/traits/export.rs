//! Export sink trait for delivering serialized object exports.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::export::{ExportDocument, ExportReceipt};

/// Destination for a serialized export (file, download, clipboard bridge).
///
/// Sinks only receive a finished document; they never see the dataset,
/// so delivering an export cannot mutate it.
#[async_trait]
pub trait ExportSink: Send + Sync + std::fmt::Debug {
    /// Short identifier for logs, e.g. `"file"` or `"memory"`.
    fn sink_type(&self) -> &str;

    /// Deliver a document and report where it ended up.
    async fn deliver(&self, document: &ExportDocument) -> AppResult<ExportReceipt>;
}
