//! Objects page service.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use docsystem_core::types::selector::ALL;
use docsystem_dataset::repositories::ObjectRepository;
use docsystem_entity::label::{Label, Labelled};
use docsystem_entity::object::{KNOWN_OBJECT_TYPES, ObjectStatus, SystemObject};

use super::filter::ObjectQuery;
use super::view::ObjectsView;
use super::{NO_OBJECTS_MESSAGE, summary};
use crate::outcome::{Listing, SelectOption};

/// A table row of the objects page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRow {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub status: ObjectStatus,
    /// Status badge.
    pub status_label: Label,
    pub last_modified: NaiveDate,
    pub author: String,
}

impl From<&SystemObject> for ObjectRow {
    fn from(object: &SystemObject) -> Self {
        Self {
            id: object.id,
            name: object.name.clone(),
            kind: object.kind.clone(),
            version: object.version.clone(),
            status: object.status,
            status_label: object.status.label(),
            last_modified: object.last_modified,
            author: object.author.clone(),
        }
    }
}

/// Objects table plus its summary line.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectsListing {
    #[serde(flatten)]
    pub listing: Listing<ObjectRow>,
    /// "Показано объектов: N из M".
    pub summary: String,
}

/// Drop-down contents of the objects page.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectFilters {
    pub types: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

/// Objects page operations.
#[derive(Debug, Clone)]
pub struct ObjectService {
    objects: ObjectRepository,
}

impl ObjectService {
    /// Create a new object service.
    pub fn new(objects: ObjectRepository) -> Self {
        Self { objects }
    }

    /// A fresh view controller for one page instance.
    pub fn view(&self, query: ObjectQuery) -> ObjectsView {
        ObjectsView::with_query(self.objects.clone(), query)
    }

    /// Filtered table rows with summary.
    pub fn list(&self, query: ObjectQuery) -> ObjectsListing {
        let view = self.view(query);
        let outcome = view.visible().map(ObjectRow::from);

        debug!(
            q = view.query().q.as_str(),
            kind = %view.query().kind,
            status = %view.query().status,
            shown = outcome.shown(),
            total = outcome.total,
            "Objects listing"
        );

        let summary = summary(outcome.shown(), outcome.total);
        ObjectsListing {
            listing: Listing::from_outcome(outcome, NO_OBJECTS_MESSAGE),
            summary,
        }
    }

    /// Owned copies of the filtered objects, in catalog order.
    pub fn visible(&self, query: ObjectQuery) -> Vec<SystemObject> {
        self.view(query)
            .visible()
            .items
            .into_iter()
            .cloned()
            .collect()
    }

    /// Options of the type and status drop-downs.
    pub fn filters(&self) -> ObjectFilters {
        let types = std::iter::once(SelectOption::new(ALL, "Все типы"))
            .chain(KNOWN_OBJECT_TYPES.iter().map(|t| SelectOption::new(*t, *t)))
            .collect();
        let statuses = std::iter::once(SelectOption::new(ALL, "Все статусы"))
            .chain(
                ObjectStatus::ALL
                    .iter()
                    .map(|s| SelectOption::new(s.as_str(), s.label().text)),
            )
            .collect();

        ObjectFilters { types, statuses }
    }
}
