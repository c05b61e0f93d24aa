//! Contacts page service.

use serde::Serialize;

use docsystem_dataset::repositories::ContactRepository;
use docsystem_entity::contact::{ContactChannel, ContactKind, Office, SupportLinks};

/// A contact card with its icon.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelCard {
    pub kind: ContactKind,
    pub icon: &'static str,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl From<&ContactChannel> for ChannelCard {
    fn from(channel: &ContactChannel) -> Self {
        Self {
            kind: channel.kind,
            icon: channel.kind.icon(),
            title: channel.title.clone(),
            value: channel.value.clone(),
            action: channel.action.clone(),
        }
    }
}

/// Everything the contacts page shows.
#[derive(Debug, Clone, Serialize)]
pub struct ContactsPage {
    pub channels: Vec<ChannelCard>,
    pub office: Office,
    pub support: SupportLinks,
}

/// Contacts page operations.
#[derive(Debug, Clone)]
pub struct ContactService {
    contacts: ContactRepository,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(contacts: ContactRepository) -> Self {
        Self { contacts }
    }

    /// Page content.
    pub fn page(&self) -> ContactsPage {
        let book = self.contacts.book();
        ContactsPage {
            channels: book.channels.iter().map(ChannelCard::from).collect(),
            office: book.office.clone(),
            support: book.support.clone(),
        }
    }
}
