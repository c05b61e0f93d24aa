//! Navigation bar and route resolution.

pub mod service;

pub use service::{NavLink, NavigationService, ResolvedRoute};
