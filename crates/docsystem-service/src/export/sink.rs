//! Export sinks: a directory on disk and an in-memory collector.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use docsystem_core::error::{AppError, ErrorKind};
use docsystem_core::result::AppResult;
use docsystem_core::traits::ExportSink;
use docsystem_core::types::{ExportDocument, ExportReceipt};

/// Writes exports into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    directory: PathBuf,
}

impl FileExportSink {
    /// Create a sink writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl ExportSink for FileExportSink {
    fn sink_type(&self) -> &str {
        "file"
    }

    async fn deliver(&self, document: &ExportDocument) -> AppResult<ExportReceipt> {
        if document.filename.contains(['/', '\\']) {
            return Err(AppError::validation(format!(
                "Invalid export file name: '{}'",
                document.filename
            )));
        }

        tokio::fs::create_dir_all(&self.directory).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to create export directory '{}'",
                    self.directory.display()
                ),
                e,
            )
        })?;

        let path = self.directory.join(&document.filename);
        tokio::fs::write(&path, &document.bytes).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write export '{}'", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = document.len(), "Export written");

        Ok(ExportReceipt {
            location: path.display().to_string(),
            bytes_written: document.len(),
        })
    }
}

/// Keeps delivered documents in memory.
#[derive(Debug, Default)]
pub struct MemoryExportSink {
    documents: Mutex<Vec<ExportDocument>>,
}

impl MemoryExportSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything delivered so far.
    pub async fn documents(&self) -> Vec<ExportDocument> {
        self.documents.lock().await.clone()
    }
}

#[async_trait]
impl ExportSink for MemoryExportSink {
    fn sink_type(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, document: &ExportDocument) -> AppResult<ExportReceipt> {
        self.documents.lock().await.push(document.clone());
        Ok(ExportReceipt {
            location: format!("memory:{}", document.filename),
            bytes_written: document.len(),
        })
    }
}
