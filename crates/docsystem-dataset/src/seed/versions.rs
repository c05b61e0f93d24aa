//! Release history.

use docsystem_core::result::AppResult;
use docsystem_entity::version::{AttachmentFile, FileType, Version, VersionType};

use super::date;

fn file(name: &str, kind: FileType, size: &str) -> AttachmentFile {
    AttachmentFile {
        name: name.to_string(),
        kind,
        size: size.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Releases, newest first.
pub fn seed_versions() -> AppResult<Vec<Version>> {
    use FileType::*;

    Ok(vec![
        Version {
            id: 1,
            version: "3.2.0".to_string(),
            date: date("2026-01-25")?,
            kind: VersionType::Major,
            title: "Крупное обновление: новый интерфейс администрирования".to_string(),
            description:
                "Полностью переработанный интерфейс с улучшенной производительностью".to_string(),
            changes: lines(&[
                "Новая панель администрирования",
                "Улучшенная система уведомлений",
                "Оптимизация работы с большими таблицами",
                "Добавлен экспорт в Excel",
            ]),
            files: vec![
                file("Руководство_v3.2.0.pdf", Pdf, "2.4 MB"),
                file("Технические_спецификации.doc", Doc, "856 KB"),
            ],
        },
        Version {
            id: 2,
            version: "3.1.5".to_string(),
            date: date("2026-01-15")?,
            kind: VersionType::Patch,
            title: "Исправление критических ошибок".to_string(),
            description: "Устранены проблемы с синхронизацией данных".to_string(),
            changes: lines(&[
                "Исправлена ошибка в модуле отчетов",
                "Улучшена стабильность системы",
                "Обновлены зависимости безопасности",
            ]),
            files: vec![file("Список_исправлений_v3.1.5.pdf", Pdf, "450 KB")],
        },
        Version {
            id: 3,
            version: "3.1.0".to_string(),
            date: date("2026-01-01")?,
            kind: VersionType::Minor,
            title: "Новые возможности фильтрации".to_string(),
            description: "Расширенные инструменты для работы с данными".to_string(),
            changes: lines(&[
                "Добавлены продвинутые фильтры",
                "Новые виды экспорта данных",
                "Улучшена производительность поиска",
            ]),
            files: vec![
                file("Руководство_фильтры.pdf", Pdf, "1.2 MB"),
                file("Примеры_использования.xls", Xls, "340 KB"),
            ],
        },
    ])
}
