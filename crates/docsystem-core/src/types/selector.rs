//! Categorical filter selector with an explicit "all" choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// Wire value meaning "do not filter on this field".
pub const ALL: &str = "all";

/// A drop-down filter: either everything, or exactly one value.
///
/// Serialized as a plain string, `"all"` for [`Selector::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector<T> {
    /// No filtering on this field.
    #[default]
    All,
    /// Keep only records whose field equals this value.
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    /// Whether a record with field value `value` passes this selector.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selector<T> {
    /// Whether this selector is the "all" choice.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }
}

impl Selector<String> {
    /// Compare a borrowed field against a string selector without allocating.
    pub fn admits_str(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr,
    T::Err: Into<AppError>,
{
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            return Ok(Self::All);
        }
        s.parse::<T>().map(Self::Only).map_err(Into::into)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL}"),
            Self::Only(v) => write!(f, "{v}"),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: Into<AppError>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e: AppError| serde::de::Error::custom(e.message))
    }
}
