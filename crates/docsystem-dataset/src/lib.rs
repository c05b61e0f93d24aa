//! # docsystem-dataset
//!
//! The static catalogs of DocSystem: release versions, system objects and
//! contact details. The [`Dataset`] is built once at start-up, checked
//! against the uniqueness invariants of the data model, and shared
//! read-only behind an `Arc` by every repository.

pub mod dataset;
pub mod repositories;
pub mod seed;

pub use dataset::Dataset;
