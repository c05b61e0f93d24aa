//! Documentation page: release history with search and type filter.

pub mod filter;
pub mod service;
pub mod view;

pub use filter::{VersionQuery, filter_versions};
pub use service::{AttachmentView, DocumentationService, VersionCard};
pub use view::DocumentationView;

/// Shown instead of the release list when nothing matches.
pub const NO_VERSIONS_MESSAGE: &str = "Версии не найдены";
