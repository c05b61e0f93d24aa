//! Documentation page handlers.

use axum::Json;
use axum::extract::{Path, State};

use docsystem_service::documentation::VersionCard;
use docsystem_service::{Listing, SelectOption, VersionQuery};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PageQuery;
use crate::state::AppState;

/// GET /api/documentation/versions?q=&type=
pub async fn list_versions(
    State(state): State<AppState>,
    PageQuery(query): PageQuery<VersionQuery>,
) -> Json<ApiResponse<Listing<VersionCard>>> {
    Json(ApiResponse::ok(state.documentation.list(query)))
}

/// GET /api/documentation/versions/{version}
pub async fn get_version(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> Result<Json<ApiResponse<VersionCard>>, ApiError> {
    let card = state.documentation.find(&version)?;
    Ok(Json(ApiResponse::ok(card)))
}

/// GET /api/documentation/filters
pub async fn filters(State(state): State<AppState>) -> Json<ApiResponse<Vec<SelectOption>>> {
    Json(ApiResponse::ok(state.documentation.type_options()))
}
