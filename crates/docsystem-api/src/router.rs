//! Route definitions for the DocSystem HTTP API.
//!
//! All routes are organized by page and mounted under `/api`.
//! Unmatched paths fall through to a JSON 404 carrying the resolved route.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(navigation_routes())
        .merge(home_routes())
        .merge(documentation_routes())
        .merge(object_routes())
        .merge(contact_routes())
        .merge(auth_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::navigation::not_found)
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Navigation bar and route resolution
fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(handlers::navigation::navigation))
        .route("/routes/resolve", get(handlers::navigation::resolve))
}

/// Home page content and global search
fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::home))
        .route("/search", get(handlers::home::search))
}

/// Release history
fn documentation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documentation/versions",
            get(handlers::documentation::list_versions),
        )
        .route(
            "/documentation/versions/{version}",
            get(handlers::documentation::get_version),
        )
        .route(
            "/documentation/filters",
            get(handlers::documentation::filters),
        )
}

/// System objects table, filters and export
fn object_routes() -> Router<AppState> {
    Router::new()
        .route("/objects", get(handlers::objects::list_objects))
        .route("/objects/filters", get(handlers::objects::filters))
        .route("/objects/export", get(handlers::objects::export))
}

fn contact_routes() -> Router<AppState> {
    Router::new().route("/contacts", get(handlers::contacts::contacts))
}

/// Auth pass-through to the configured gateway
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/verify-email", post(handlers::auth::verify_email))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/reset-password", post(handlers::auth::reset_password))
}
