//! Response DTOs.

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use docsystem_core::error::AppError;
use docsystem_core::types::ExportDocument;

use crate::error::ApiError;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Releases in the catalog.
    pub versions: usize,
    /// Objects in the catalog.
    pub objects: usize,
}

/// An export served as a file download.
#[derive(Debug)]
pub struct Download(pub ExportDocument);

impl IntoResponse for Download {
    fn into_response(self) -> Response {
        let document = self.0;
        let built = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, &document.content_type)
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            )
            .header(header::CONTENT_LENGTH, document.len())
            .header("x-record-count", document.record_count)
            .body(Body::from(document.bytes));

        match built {
            Ok(response) => response,
            Err(e) => ApiError::from(AppError::internal(format!("Response build failed: {e}")))
                .into_response(),
        }
    }
}
