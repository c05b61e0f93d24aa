//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{ExportParams, ResolveParams, SearchParams};
pub use response::{ApiResponse, Download, HealthResponse};
