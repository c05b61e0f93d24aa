//! Release type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::label::{Label, LabelStyle, Labelled};

/// Size of a release. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    /// Breaking or headline release.
    Major,
    /// Feature release.
    Minor,
    /// Bug-fix release.
    Patch,
}

impl VersionType {
    /// Every variant, in selector order.
    pub const ALL: [VersionType; 3] = [Self::Major, Self::Minor, Self::Patch];

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }

    /// Plural label used in the type drop-down.
    pub fn option_label(&self) -> &'static str {
        match self {
            Self::Major => "Крупные",
            Self::Minor => "Средние",
            Self::Patch => "Исправления",
        }
    }
}

impl Labelled for VersionType {
    fn label(&self) -> Label {
        match self {
            Self::Major => Label::new("Крупное", LabelStyle::Primary),
            Self::Minor => Label::new("Среднее", LabelStyle::Secondary),
            Self::Patch => Label::new("Исправление", LabelStyle::Muted),
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VersionType {
    type Err = docsystem_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(docsystem_core::AppError::validation(format!(
                "Invalid version type: '{s}'. Expected one of: all, major, minor, patch"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_cover_every_variant() {
        for kind in VersionType::ALL {
            let label = kind.label();
            assert!(!label.text.is_empty());
            assert_ne!(label.style, LabelStyle::Unmapped);
        }
        assert_eq!(VersionType::Major.label().text, "Крупное");
        assert_eq!(VersionType::Patch.label().style, LabelStyle::Muted);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("major".parse::<VersionType>().unwrap(), VersionType::Major);
        assert_eq!("PATCH".parse::<VersionType>().unwrap(), VersionType::Patch);
        assert!("hotfix".parse::<VersionType>().is_err());
    }
}
