//! System object catalog.

use docsystem_core::result::AppResult;
use docsystem_entity::object::{ObjectStatus, SystemObject};

use super::date;

fn object(
    id: u32,
    name: &str,
    kind: &str,
    version: &str,
    status: ObjectStatus,
    last_modified: &str,
    author: &str,
) -> AppResult<SystemObject> {
    Ok(SystemObject {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        version: version.to_string(),
        status,
        last_modified: date(last_modified)?,
        author: author.to_string(),
    })
}

/// Catalog entries in table order.
pub fn seed_objects() -> AppResult<Vec<SystemObject>> {
    use ObjectStatus::*;

    Ok(vec![
        object(
            1,
            "UserAuthModule",
            "Модуль",
            "3.2.0",
            Active,
            "2026-01-25",
            "Иванов И.И.",
        )?,
        object(
            2,
            "ReportGenerator",
            "Компонент",
            "3.1.5",
            Active,
            "2026-01-20",
            "Петров П.П.",
        )?,
        object(
            3,
            "DataSyncService",
            "Сервис",
            "3.2.0",
            Beta,
            "2026-01-24",
            "Сидоров С.С.",
        )?,
        object(
            4,
            "OldAPIHandler",
            "API",
            "2.8.0",
            Deprecated,
            "2025-12-10",
            "Иванов И.И.",
        )?,
        object(
            5,
            "NotificationSystem",
            "Модуль",
            "3.2.0",
            Active,
            "2026-01-25",
            "Козлов К.К.",
        )?,
        object(
            6,
            "AdminPanel",
            "Интерфейс",
            "3.2.0",
            Active,
            "2026-01-25",
            "Новиков Н.Н.",
        )?,
    ])
}
