//! Display labels for closed enumerations.
//!
//! Every closed enum implements [`Labelled`] with an exhaustive `match`,
//! so adding a variant without a label fails to compile. Values that
//! arrive as raw strings are mapped by the crate-internal `raw` lookup,
//! which never renders blank.

mod raw;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Visual style category of a badge. The renderer picks colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Strongest emphasis.
    Primary,
    /// Secondary emphasis.
    Secondary,
    /// De-emphasized.
    Muted,
    /// Healthy / in use.
    Success,
    /// Retired / dangerous.
    Danger,
    /// Informational / preview.
    Info,
    /// A value outside the closed set. Rendered with a warning marker.
    Unmapped,
}

/// A badge: text plus style category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Text shown to the user.
    pub text: Cow<'static, str>,
    /// Style category.
    pub style: LabelStyle,
}

impl Label {
    /// Label with static text.
    pub const fn new(text: &'static str, style: LabelStyle) -> Self {
        Self {
            text: Cow::Borrowed(text),
            style,
        }
    }

    /// Fallback label for a value outside the closed set.
    pub fn unmapped(raw: &str) -> Self {
        Self {
            text: Cow::Owned(format!("⚠ {raw}")),
            style: LabelStyle::Unmapped,
        }
    }

    /// Whether this is the fallback marker.
    pub fn is_unmapped(&self) -> bool {
        self.style == LabelStyle::Unmapped
    }
}

/// Total mapping from a closed enum value to its badge.
pub trait Labelled {
    /// The badge for this value.
    fn label(&self) -> Label;
}
