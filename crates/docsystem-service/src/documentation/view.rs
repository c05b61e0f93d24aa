//! Transient state of the documentation page.

use docsystem_core::types::{Selector, TextQuery};
use docsystem_dataset::repositories::VersionRepository;
use docsystem_entity::version::{Version, VersionType};

use super::filter::VersionQuery;
use crate::outcome::FilterOutcome;

/// Search and type selection of one documentation page instance.
///
/// Every state change is followed by a fresh [`visible`](Self::visible)
/// call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct DocumentationView {
    versions: VersionRepository,
    query: VersionQuery,
}

impl DocumentationView {
    /// A view with no filters.
    pub fn new(versions: VersionRepository) -> Self {
        Self::with_query(versions, VersionQuery::default())
    }

    /// A view starting from an existing query.
    pub fn with_query(versions: VersionRepository, query: VersionQuery) -> Self {
        Self { versions, query }
    }

    /// Current filter state.
    pub fn query(&self) -> &VersionQuery {
        &self.query
    }

    /// Replace the search text.
    pub fn set_search(&mut self, q: impl Into<TextQuery>) {
        self.query.q = q.into();
    }

    /// Replace the type selection.
    pub fn set_type(&mut self, kind: Selector<VersionType>) {
        self.query.kind = kind;
    }

    /// Clear search and selection.
    pub fn reset(&mut self) {
        self.query = VersionQuery::default();
    }

    /// Releases passing the current filters, in source order.
    pub fn visible(&self) -> FilterOutcome<&Version> {
        let all = self.versions.find_all();
        let items = super::filter_versions(all, &self.query);
        FilterOutcome::new(items, all.len(), self.query.is_active())
    }
}
