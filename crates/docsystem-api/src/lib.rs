//! # docsystem-api
//!
//! HTTP API layer for DocSystem built on Axum.
//!
//! Exposes every page contract (navigation, home, documentation, objects,
//! export, contacts) and the auth pass-through as JSON under `/api`, with
//! CORS, compression, tracing and request logging middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
