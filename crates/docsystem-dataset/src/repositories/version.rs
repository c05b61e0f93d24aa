//! Release version repository.

use std::sync::Arc;

use docsystem_entity::version::Version;

use crate::dataset::Dataset;

/// Read access to the release history.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    dataset: Arc<Dataset>,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// All versions in source order.
    pub fn find_all(&self) -> &[Version] {
        self.dataset.versions()
    }

    /// Find a release by its version string.
    pub fn find_by_version(&self, version: &str) -> Option<&Version> {
        self.find_all().iter().find(|v| v.version == version)
    }

    /// Find a release by ID.
    pub fn find_by_id(&self, id: u32) -> Option<&Version> {
        self.find_all().iter().find(|v| v.id == id)
    }

    /// Number of releases.
    pub fn count(&self) -> usize {
        self.find_all().len()
    }
}
