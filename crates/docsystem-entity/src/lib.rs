//! # docsystem-entity
//!
//! Domain entity models for DocSystem. Every struct in this crate is a
//! read-only record of the static catalogs (release versions, system
//! objects, contacts), a navigation value object, or an auth payload
//! exchanged with the external authentication service.
//!
//! Closed enumerations map to display labels through the [`label`]
//! module using exhaustive matches.

pub mod auth;
pub mod contact;
pub mod label;
pub mod navigation;
pub mod object;
pub mod version;

pub use label::{Label, LabelStyle, Labelled};
pub use object::{ObjectStatus, SystemObject};
pub use version::{AttachmentFile, FileType, Version, VersionType};
