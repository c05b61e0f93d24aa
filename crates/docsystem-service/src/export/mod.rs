//! Export of the filtered objects view.

pub mod format;
pub mod service;
pub mod sink;

pub use format::ExportFormat;
pub use service::ExportService;
pub use sink::{FileExportSink, MemoryExportSink};
