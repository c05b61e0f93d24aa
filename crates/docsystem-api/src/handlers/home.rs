//! Home page handlers.

use axum::Json;
use axum::extract::State;

use docsystem_service::{HomePage, SearchResults};

use crate::dto::request::SearchParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PageQuery;
use crate::state::AppState;

/// GET /api/home
pub async fn home(State(state): State<AppState>) -> Json<ApiResponse<HomePage>> {
    Json(ApiResponse::ok(state.home.page()))
}

/// GET /api/search?q=
pub async fn search(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<SearchParams>,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let results = state.home.search(&params.q)?;
    Ok(Json(ApiResponse::ok(results)))
}
