//! Navigation, route resolution and the not-found fallback.

use axum::Json;
use axum::extract::State;
use axum::http::Uri;

use docsystem_core::error::AppError;
use docsystem_service::{NavLink, ResolvedRoute};

use crate::dto::request::ResolveParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PageQuery;
use crate::state::AppState;

/// GET /api/navigation?path=
pub async fn navigation(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<ResolveParams>,
) -> Json<ApiResponse<Vec<NavLink>>> {
    Json(ApiResponse::ok(state.navigation.items(&params.path)))
}

/// GET /api/routes/resolve?path=
pub async fn resolve(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<ResolveParams>,
) -> Json<ApiResponse<ResolvedRoute>> {
    Json(ApiResponse::ok(state.navigation.resolve(&params.path)))
}

/// Any unmatched path.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ApiError {
    let resolved = state.navigation.resolve(uri.path());
    let details = serde_json::to_value(&resolved).unwrap_or_default();
    let error = AppError::not_found(format!("Route '{}' not found", uri.path()));
    ApiError::from(error).with_details(details)
}
