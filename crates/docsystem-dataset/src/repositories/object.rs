//! System object repository.

use std::sync::Arc;

use docsystem_entity::object::SystemObject;

use crate::dataset::Dataset;

/// Read access to the system object catalog.
#[derive(Debug, Clone)]
pub struct ObjectRepository {
    dataset: Arc<Dataset>,
}

impl ObjectRepository {
    /// Create a new object repository.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// All objects in source order.
    pub fn find_all(&self) -> &[SystemObject] {
        self.dataset.objects()
    }

    /// Find an object by ID.
    pub fn find_by_id(&self, id: u32) -> Option<&SystemObject> {
        self.find_all().iter().find(|o| o.id == id)
    }

    /// Distinct type values present in the catalog, in first-seen order.
    /// May include values the type filter does not advertise.
    pub fn distinct_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for object in self.find_all() {
            if !types.contains(&object.kind.as_str()) {
                types.push(&object.kind);
            }
        }
        types
    }

    /// Number of objects.
    pub fn count(&self) -> usize {
        self.find_all().len()
    }
}
