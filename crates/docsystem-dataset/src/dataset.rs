//! The immutable in-memory dataset.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_entity::contact::{ContactChannel, Office, SupportLinks};
use docsystem_entity::object::SystemObject;
use docsystem_entity::version::Version;

use crate::seed;

/// Contacts page content.
#[derive(Debug, Clone)]
pub struct ContactBook {
    /// Contact cards in display order.
    pub channels: Vec<ContactChannel>,
    /// Office card.
    pub office: Office,
    /// Support block.
    pub support: SupportLinks,
}

/// All catalogs, validated and frozen.
///
/// There is no way to obtain a mutable reference once construction
/// succeeded; the dataset lives for the whole process.
#[derive(Debug)]
pub struct Dataset {
    versions: Vec<Version>,
    objects: Vec<SystemObject>,
    contacts: ContactBook,
}

impl Dataset {
    /// Build a dataset, enforcing the uniqueness invariants.
    ///
    /// Version `id` and `version` must be unique; object `id` and `name`
    /// must be unique.
    pub fn new(
        versions: Vec<Version>,
        objects: Vec<SystemObject>,
        contacts: ContactBook,
    ) -> AppResult<Self> {
        ensure_unique("version id", versions.iter().map(|v| v.id.to_string()))?;
        ensure_unique("version string", versions.iter().map(|v| v.version.clone()))?;
        ensure_unique("object id", objects.iter().map(|o| o.id.to_string()))?;
        ensure_unique("object name", objects.iter().map(|o| o.name.clone()))?;

        Ok(Self {
            versions,
            objects,
            contacts,
        })
    }

    /// The reference dataset shipped with the application.
    pub fn seeded() -> AppResult<Arc<Self>> {
        let dataset = Self::new(
            seed::versions::seed_versions()?,
            seed::objects::seed_objects()?,
            seed::contacts::seed_contacts(),
        )?;

        info!(
            versions = dataset.versions.len(),
            objects = dataset.objects.len(),
            contacts = dataset.contacts.channels.len(),
            "Dataset seeded"
        );

        Ok(Arc::new(dataset))
    }

    /// Release versions in source order.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// System objects in source order.
    pub fn objects(&self) -> &[SystemObject] {
        &self.objects
    }

    /// Contacts page content.
    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }
}

fn ensure_unique(what: &str, values: impl Iterator<Item = String>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.clone()) {
            return Err(AppError::validation(format!(
                "Duplicate {what} in dataset: '{value}'"
            )));
        }
    }
    Ok(())
}
