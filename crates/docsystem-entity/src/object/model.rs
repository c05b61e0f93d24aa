//! System object entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::ObjectStatus;

/// A cataloged internal component, module or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemObject {
    /// Unique identifier.
    pub id: u32,
    /// Unique display name.
    pub name: String,
    /// Free-text category (see [`KNOWN_OBJECT_TYPES`](super::KNOWN_OBJECT_TYPES)).
    #[serde(rename = "type")]
    pub kind: String,
    /// Semantic version string; several objects may share one.
    pub version: String,
    /// Lifecycle status.
    pub status: ObjectStatus,
    /// Date of the last change.
    pub last_modified: NaiveDate,
    /// Responsible developer.
    pub author: String,
}
