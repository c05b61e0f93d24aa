//! Core type definitions used across the DocSystem workspace.

pub mod export;
pub mod response;
pub mod selector;
pub mod text;

pub use export::{ExportDocument, ExportReceipt};
pub use response::ApiErrorResponse;
pub use selector::Selector;
pub use text::TextQuery;
