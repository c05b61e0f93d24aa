//! Query parameter DTOs that are not page queries themselves.

use serde::{Deserialize, Serialize};

use docsystem_core::types::{Selector, TextQuery};
use docsystem_entity::object::ObjectStatus;
use docsystem_service::ObjectQuery;

/// `GET /api/search?q=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/routes/resolve?path=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveParams {
    #[serde(default)]
    pub path: String,
}

/// `GET /api/objects/export?q=&type=&status=&format=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub q: TextQuery,
    #[serde(default, rename = "type")]
    pub kind: Selector<String>,
    #[serde(default)]
    pub status: Selector<ObjectStatus>,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub format: Option<String>,
}

impl ExportParams {
    /// Split into the objects query and the requested format.
    pub fn into_parts(self) -> (ObjectQuery, Option<String>) {
        (
            ObjectQuery::new(self.q, self.kind, self.status),
            self.format,
        )
    }
}
