//! Custom Axum extractors.

pub mod body;
pub mod query;

pub use body::JsonBody;
pub use query::PageQuery;
