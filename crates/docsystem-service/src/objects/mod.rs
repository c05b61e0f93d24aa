//! System objects page: searchable, filterable catalog table.

pub mod filter;
pub mod service;
pub mod view;

pub use filter::{ObjectQuery, filter_objects};
pub use service::{ObjectFilters, ObjectRow, ObjectService, ObjectsListing};
pub use view::ObjectsView;

/// Shown instead of the table when nothing matches.
pub const NO_OBJECTS_MESSAGE: &str = "Объекты не найдены";

/// The "shown N of M" line under the table.
pub fn summary(shown: usize, total: usize) -> String {
    format!("Показано объектов: {shown} из {total}")
}
