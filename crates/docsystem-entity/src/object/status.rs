//! Object lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::label::{Label, LabelStyle, Labelled};

/// Lifecycle status of a system object. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStatus {
    /// In production use.
    Active,
    /// Scheduled for removal.
    Deprecated,
    /// Preview.
    Beta,
}

impl ObjectStatus {
    /// Every variant, in the order the status drop-down lists them.
    pub const ALL: [ObjectStatus; 3] = [Self::Active, Self::Beta, Self::Deprecated];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
            Self::Beta => "beta",
        }
    }
}

impl Labelled for ObjectStatus {
    fn label(&self) -> Label {
        match self {
            Self::Active => Label::new("Активен", LabelStyle::Success),
            Self::Deprecated => Label::new("Устарел", LabelStyle::Danger),
            Self::Beta => Label::new("Бета", LabelStyle::Info),
        }
    }
}

impl fmt::Display for ObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectStatus {
    type Err = docsystem_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deprecated" => Ok(Self::Deprecated),
            "beta" => Ok(Self::Beta),
            _ => Err(docsystem_core::AppError::validation(format!(
                "Invalid object status: '{s}'. Expected one of: all, active, beta, deprecated"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_label() {
        for status in ObjectStatus::ALL {
            assert!(!status.label().is_unmapped());
        }
        assert_eq!(ObjectStatus::Beta.label().text, "Бета");
    }

    #[test]
    fn test_from_str() {
        let active: ObjectStatus = "active".parse().unwrap();
        assert_eq!(active, ObjectStatus::Active);
        assert_eq!("Beta".parse::<ObjectStatus>().unwrap(), ObjectStatus::Beta);
        assert!("retired".parse::<ObjectStatus>().is_err());
    }
}
