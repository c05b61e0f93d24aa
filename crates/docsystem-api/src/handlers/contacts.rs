//! Contacts page handler.

use axum::Json;
use axum::extract::State;

use docsystem_service::ContactsPage;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/contacts
pub async fn contacts(State(state): State<AppState>) -> Json<ApiResponse<ContactsPage>> {
    Json(ApiResponse::ok(state.contacts.page()))
}
