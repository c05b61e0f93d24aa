//! # docsystem-core
//!
//! Core crate for DocSystem. Contains configuration schemas, the text
//! query and selector types shared by every filterable page, the export
//! sink trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocSystem crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
