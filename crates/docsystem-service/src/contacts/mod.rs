//! Contacts page.

pub mod service;

pub use service::{ChannelCard, ContactService, ContactsPage};
