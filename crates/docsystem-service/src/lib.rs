//! # docsystem-service
//!
//! Page-level services for DocSystem. Each page owns a filter predicate
//! (pure function over the static dataset), a view controller holding
//! the page's transient search/filter state, and a service that turns
//! the visible records into labelled presentation rows.
//!
//! Services follow constructor injection: repositories are handed in at
//! construction time and cloned cheaply (they share one `Arc<Dataset>`).

pub mod contacts;
pub mod documentation;
pub mod export;
pub mod home;
pub mod navigation;
pub mod objects;
pub mod outcome;

pub use contacts::{ContactService, ContactsPage};
pub use documentation::{DocumentationService, DocumentationView, VersionCard, VersionQuery};
pub use export::{ExportFormat, ExportService, FileExportSink, MemoryExportSink};
pub use home::{HomePage, HomeService, SearchResults};
pub use navigation::{NavLink, NavigationService, ResolvedRoute};
pub use objects::{ObjectFilters, ObjectQuery, ObjectService, ObjectsListing, ObjectsView};
pub use outcome::{FilterOutcome, Listing, ResultState, SelectOption};
