//! Documentation page service.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_core::types::selector::ALL;
use docsystem_dataset::repositories::VersionRepository;
use docsystem_entity::label::{Label, Labelled};
use docsystem_entity::version::{AttachmentFile, FileType, Version, VersionType};

use super::NO_VERSIONS_MESSAGE;
use super::filter::VersionQuery;
use super::view::DocumentationView;
use crate::outcome::{Listing, SelectOption};

/// A downloadable file of a release, with its icon.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentView {
    /// File name.
    pub name: String,
    /// File type.
    #[serde(rename = "type")]
    pub kind: FileType,
    /// Display size.
    pub size: String,
    /// Icon name.
    pub icon: &'static str,
}

impl From<&AttachmentFile> for AttachmentView {
    fn from(file: &AttachmentFile) -> Self {
        Self {
            name: file.name.clone(),
            kind: file.kind,
            size: file.size.clone(),
            icon: file.kind.icon(),
        }
    }
}

/// A release as rendered on the documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct VersionCard {
    pub id: u32,
    pub version: String,
    /// `v`-prefixed heading.
    pub display_version: String,
    pub date: NaiveDate,
    /// `DD.MM.YYYY`.
    pub display_date: String,
    #[serde(rename = "type")]
    pub kind: VersionType,
    /// Type badge.
    pub label: Label,
    pub title: String,
    pub description: String,
    pub changes: Vec<String>,
    pub files: Vec<AttachmentView>,
}

impl From<&Version> for VersionCard {
    fn from(version: &Version) -> Self {
        Self {
            id: version.id,
            version: version.version.clone(),
            display_version: version.display_version(),
            date: version.date,
            display_date: version.display_date(),
            kind: version.kind,
            label: version.kind.label(),
            title: version.title.clone(),
            description: version.description.clone(),
            changes: version.changes.clone(),
            files: version.files.iter().map(AttachmentView::from).collect(),
        }
    }
}

/// Documentation page operations.
#[derive(Debug, Clone)]
pub struct DocumentationService {
    versions: VersionRepository,
}

impl DocumentationService {
    /// Create a new documentation service.
    pub fn new(versions: VersionRepository) -> Self {
        Self { versions }
    }

    /// A fresh view controller for one page instance.
    pub fn view(&self, query: VersionQuery) -> DocumentationView {
        DocumentationView::with_query(self.versions.clone(), query)
    }

    /// Filtered release cards.
    pub fn list(&self, query: VersionQuery) -> Listing<VersionCard> {
        let view = self.view(query);
        let outcome = view.visible().map(VersionCard::from);

        debug!(
            q = view.query().q.as_str(),
            kind = %view.query().kind,
            shown = outcome.shown(),
            total = outcome.total,
            "Documentation listing"
        );

        Listing::from_outcome(outcome, NO_VERSIONS_MESSAGE)
    }

    /// One release by version string.
    pub fn find(&self, version: &str) -> AppResult<VersionCard> {
        let version = version.strip_prefix('v').unwrap_or(version);
        self.versions
            .find_by_version(version)
            .map(VersionCard::from)
            .ok_or_else(|| AppError::not_found(format!("Version '{version}' not found")))
    }

    /// Options of the type drop-down.
    pub fn type_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::new(ALL, "Все типы"))
            .chain(
                VersionType::ALL
                    .iter()
                    .map(|kind| SelectOption::new(kind.as_str(), kind.option_label())),
            )
            .collect()
    }
}
