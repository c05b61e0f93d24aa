//! Object type values offered by the type filter.
//!
//! An object's `type` is free text; this list is only what the filter
//! drop-down advertises. Objects with other types exist in the catalog
//! and are found with the "all" selector.

/// Type values listed in the filter drop-down, in display order.
pub const KNOWN_OBJECT_TYPES: [&str; 5] = ["Модуль", "Компонент", "Сервис", "API", "Интерфейс"];

/// Whether `kind` is one of the advertised filter values.
pub fn is_known_type(kind: &str) -> bool {
    KNOWN_OBJECT_TYPES.contains(&kind)
}
