//! Version (release) entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::file_type::FileType;
use super::kind::VersionType;

/// A documented software release with changelog and attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Unique identifier, assigned when the dataset is built.
    pub id: u32,
    /// Semantic version string, unique within the dataset.
    pub version: String,
    /// Release date.
    pub date: NaiveDate,
    /// Release size.
    #[serde(rename = "type")]
    pub kind: VersionType,
    /// Headline.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Changelog entries in display order.
    pub changes: Vec<String>,
    /// Attached documents in display order.
    pub files: Vec<AttachmentFile>,
}

/// A downloadable document attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentFile {
    /// File name shown on the download button.
    pub name: String,
    /// Document format.
    #[serde(rename = "type")]
    pub kind: FileType,
    /// Human-readable size, e.g. `"2.4 MB"`.
    pub size: String,
}

impl Version {
    /// Version string with the `v` prefix used in headings.
    pub fn display_version(&self) -> String {
        format!("v{}", self.version)
    }

    /// Release date formatted the way the Russian locale prints it.
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_type_key() {
        let version = Version {
            id: 7,
            version: "1.0.0".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            kind: VersionType::Minor,
            title: "t".to_string(),
            description: "d".to_string(),
            changes: vec![],
            files: vec![AttachmentFile {
                name: "a.xls".to_string(),
                kind: FileType::Xls,
                size: "1 KB".to_string(),
            }],
        };

        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["type"], "minor");
        assert_eq!(json["date"], "2026-01-25");
        assert_eq!(json["files"][0]["type"], "xls");
        assert_eq!(version.display_version(), "v1.0.0");
        assert_eq!(version.display_date(), "25.01.2026");
    }
}
