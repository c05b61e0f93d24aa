//! Contact page entities.

pub mod model;

pub use model::{ContactChannel, ContactKind, Office, SupportLinks};
