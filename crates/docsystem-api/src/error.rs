//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use docsystem_core::error::{AppError, ErrorKind};
use docsystem_core::types::ApiErrorResponse;

/// Handler error: an [`AppError`] plus optional structured details.
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Attach a `details` object to the response body.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The wrapped domain error.
    pub fn inner(&self) -> &AppError {
        &self.inner
    }
}

impl From<AppError> for ApiError {
    fn from(inner: AppError) -> Self {
        Self {
            inner,
            details: None,
        }
    }
}

/// HTTP status and machine-readable code of an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::ExternalService => (StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR"),
        ErrorKind::Internal
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.inner.kind);

        if status.is_server_error() {
            tracing::error!(kind = %self.inner.kind, error = %self.inner.message, "Request failed");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.inner.message,
            details: self.details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict).0, StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(ErrorKind::ExternalService).0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status_for(ErrorKind::Storage).1, "INTERNAL_ERROR");
    }

    #[test]
    fn test_into_response_status() {
        let error = ApiError::from(AppError::not_found("Version '9.9.9' not found"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
