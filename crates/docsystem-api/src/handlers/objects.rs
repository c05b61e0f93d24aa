//! Objects page handlers.

use axum::Json;
use axum::extract::State;

use docsystem_service::{ExportFormat, ObjectFilters, ObjectQuery, ObjectsListing};

use crate::dto::request::ExportParams;
use crate::dto::response::{ApiResponse, Download};
use crate::error::ApiError;
use crate::extractors::PageQuery;
use crate::state::AppState;

/// GET /api/objects?q=&type=&status=
pub async fn list_objects(
    State(state): State<AppState>,
    PageQuery(query): PageQuery<ObjectQuery>,
) -> Json<ApiResponse<ObjectsListing>> {
    Json(ApiResponse::ok(state.objects.list(query)))
}

/// GET /api/objects/filters
pub async fn filters(State(state): State<AppState>) -> Json<ApiResponse<ObjectFilters>> {
    Json(ApiResponse::ok(state.objects.filters()))
}

/// GET /api/objects/export?q=&type=&status=&format=
pub async fn export(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<ExportParams>,
) -> Result<Download, ApiError> {
    let (query, format) = params.into_parts();
    let format: ExportFormat = format
        .as_deref()
        .unwrap_or(&state.config.export.default_format)
        .parse()?;

    let document = state.export.render(query, format)?;
    tracing::info!(
        filename = %document.filename,
        records = document.record_count,
        "Objects export downloaded"
    );

    Ok(Download(document))
}
