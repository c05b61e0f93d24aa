//! Contact channels and office location.

use serde::{Deserialize, Serialize};

/// Kind of a contact channel card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// E-mail address.
    Email,
    /// Phone number.
    Phone,
    /// Telegram handle.
    Telegram,
    /// Office hours (informational, no action).
    Hours,
}

impl ContactKind {
    /// Icon name for the card.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Email => "Mail",
            Self::Phone => "Phone",
            Self::Telegram => "MessageCircle",
            Self::Hours => "Clock",
        }
    }
}

/// A single contact card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Channel kind.
    pub kind: ContactKind,
    /// Card heading.
    pub title: String,
    /// Displayed value.
    pub value: String,
    /// Link opened by the "Связаться" button, if the channel has one.
    pub action: Option<String>,
}

impl ContactChannel {
    /// Whether the card shows a contact button.
    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}

/// Office location card and embedded map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    /// Card heading.
    pub title: String,
    /// Invitation text.
    pub description: String,
    /// Street address.
    pub address: String,
    /// "Построить маршрут" link.
    pub route_url: String,
    /// Map widget URL.
    pub map_embed_url: String,
    /// Latitude of the map pin.
    pub latitude: f64,
    /// Longitude of the map pin.
    pub longitude: f64,
}

/// Links of the "need help" block at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportLinks {
    /// Block text.
    pub message: String,
    /// "Написать в поддержку" link.
    pub email_url: String,
    /// "Telegram чат" link.
    pub telegram_url: String,
}
