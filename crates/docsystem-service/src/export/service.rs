//! Export service.

use chrono::{Local, NaiveDate};
use tracing::info;

use docsystem_core::result::AppResult;
use docsystem_core::traits::ExportSink;
use docsystem_core::types::{ExportDocument, ExportReceipt};

use super::format::ExportFormat;
use crate::objects::{ObjectQuery, ObjectService};

/// Serializes the filtered objects view and hands it to a sink.
///
/// Rendering reads the catalog only; repeating an export with the same
/// query and date yields byte-identical output.
#[derive(Debug, Clone)]
pub struct ExportService {
    objects: ObjectService,
}

impl ExportService {
    /// Create a new export service.
    pub fn new(objects: ObjectService) -> Self {
        Self { objects }
    }

    /// Render an export dated today.
    pub fn render(&self, query: ObjectQuery, format: ExportFormat) -> AppResult<ExportDocument> {
        self.render_on(query, format, Local::now().date_naive())
    }

    /// Render an export with an explicit date in the file name.
    pub fn render_on(
        &self,
        query: ObjectQuery,
        format: ExportFormat,
        date: NaiveDate,
    ) -> AppResult<ExportDocument> {
        let objects = self.objects.visible(query);
        let bytes = format.serialize(&objects)?;

        Ok(ExportDocument {
            filename: filename(format, date),
            content_type: format.content_type().to_string(),
            record_count: objects.len(),
            bytes,
        })
    }

    /// Render and deliver an export.
    pub async fn export_to(
        &self,
        sink: &dyn ExportSink,
        query: ObjectQuery,
        format: ExportFormat,
    ) -> AppResult<ExportReceipt> {
        let document = self.render(query, format)?;
        let receipt = sink.deliver(&document).await?;

        info!(
            sink = sink.sink_type(),
            filename = %document.filename,
            records = document.record_count,
            bytes = receipt.bytes_written,
            location = %receipt.location,
            "Objects exported"
        );

        Ok(receipt)
    }
}

/// `system-objects-<YYYYMMDD>.<ext>`
pub fn filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "system-objects-{}.{}",
        date.format("%Y%m%d"),
        format.extension()
    )
}
