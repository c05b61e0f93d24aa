//! Auth handlers. Each call is validated, then forwarded to the gateway.

use axum::Json;
use axum::extract::State;

use docsystem_entity::auth::{
    AuthMessage, AuthSession, Credentials, LogoutRequest, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Credentials>,
) -> Result<Json<ApiResponse<AuthSession>>, ApiError> {
    state.auth_validator.credentials(&req)?;
    let session = state.auth_gateway.login(&req).await?;
    tracing::info!(user_id = session.user.id, "User signed in");
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthMessage>>, ApiError> {
    state.auth_validator.register(&req)?;
    let message = state.auth_gateway.register(&req).await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// POST /api/auth/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<VerifyEmailRequest>,
) -> Result<Json<ApiResponse<AuthMessage>>, ApiError> {
    state.auth_validator.verify_email(&req)?;
    let message = state.auth_gateway.verify_email(&req).await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, ApiError> {
    state.auth_validator.refresh(&req)?;
    let session = state.auth_gateway.refresh(&req).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LogoutRequest>,
) -> Result<Json<ApiResponse<AuthMessage>>, ApiError> {
    state.auth_validator.logout(&req)?;
    let message = state.auth_gateway.logout(&req).await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<AuthMessage>>, ApiError> {
    state.auth_validator.reset_password(&req)?;
    let message = state.auth_gateway.reset_password(&req).await?;
    Ok(Json(ApiResponse::ok(message)))
}
