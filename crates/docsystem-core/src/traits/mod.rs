//! Core traits defined in `docsystem-core` and implemented by other crates.

pub mod export;

pub use export::ExportSink;
