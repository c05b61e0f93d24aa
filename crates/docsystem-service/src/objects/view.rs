//! Transient state of the objects page.

use docsystem_core::types::{Selector, TextQuery};
use docsystem_dataset::repositories::ObjectRepository;
use docsystem_entity::object::{ObjectStatus, SystemObject};

use super::filter::ObjectQuery;
use crate::outcome::FilterOutcome;

/// Search, type and status selection of one objects page instance.
#[derive(Debug, Clone)]
pub struct ObjectsView {
    objects: ObjectRepository,
    query: ObjectQuery,
}

impl ObjectsView {
    /// A view with no filters.
    pub fn new(objects: ObjectRepository) -> Self {
        Self::with_query(objects, ObjectQuery::default())
    }

    /// A view starting from an existing query.
    pub fn with_query(objects: ObjectRepository, query: ObjectQuery) -> Self {
        Self { objects, query }
    }

    /// Current filter state.
    pub fn query(&self) -> &ObjectQuery {
        &self.query
    }

    /// Replace the search text.
    pub fn set_search(&mut self, q: impl Into<TextQuery>) {
        self.query.q = q.into();
    }

    /// Replace the type selection.
    pub fn set_type(&mut self, kind: Selector<String>) {
        self.query.kind = kind;
    }

    /// Replace the status selection.
    pub fn set_status(&mut self, status: Selector<ObjectStatus>) {
        self.query.status = status;
    }

    /// Clear search and both selections.
    pub fn reset(&mut self) {
        self.query = ObjectQuery::default();
    }

    /// Objects passing the current filters, in catalog order.
    pub fn visible(&self) -> FilterOutcome<&SystemObject> {
        let all = self.objects.find_all();
        let items = super::filter_objects(all, &self.query);
        FilterOutcome::new(items, all.len(), self.query.is_active())
    }
}
