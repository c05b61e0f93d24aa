//! Home page service.

use serde::Serialize;
use tracing::info;

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_core::types::{Selector, TextQuery};
use docsystem_entity::navigation::Route;

use crate::documentation::{DocumentationService, VersionCard, VersionQuery};
use crate::objects::{ObjectQuery, ObjectRow, ObjectService};

/// A clickable feature card.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Page opened by the card; `None` for cards without a page yet.
    pub route: Option<Route>,
}

/// A headline number under the feature cards.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static home page content.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub search_placeholder: &'static str,
    pub features: Vec<FeatureCard>,
    pub stats: Vec<Stat>,
}

/// Hits of the global search across both catalogs.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub versions: Vec<VersionCard>,
    pub objects: Vec<ObjectRow>,
    pub total: usize,
}

/// Home page operations.
#[derive(Debug, Clone)]
pub struct HomeService {
    documentation: DocumentationService,
    objects: ObjectService,
}

impl HomeService {
    /// Create a new home service.
    pub fn new(documentation: DocumentationService, objects: ObjectService) -> Self {
        Self {
            documentation,
            objects,
        }
    }

    /// Static page content.
    pub fn page(&self) -> HomePage {
        HomePage {
            heading: "Добро пожаловать в DocSystem",
            tagline: "Ваша система управления версиями и документацией программного продукта",
            search_placeholder: "Поиск по документации, версиям, объектам...",
            features: vec![
                FeatureCard {
                    icon: "FileText",
                    title: "Документация",
                    description: "Актуальные версии и релизы",
                    route: Some(Route::Documentation),
                },
                FeatureCard {
                    icon: "Database",
                    title: "Объекты системы",
                    description: "База данных объектов",
                    route: Some(Route::Objects),
                },
                FeatureCard {
                    icon: "Bell",
                    title: "Уведомления",
                    description: "Следите за обновлениями",
                    route: None,
                },
                FeatureCard {
                    icon: "History",
                    title: "История изменений",
                    description: "Полный журнал версий",
                    route: None,
                },
            ],
            stats: vec![
                Stat {
                    value: "150+",
                    label: "Выпущенных версий",
                },
                Stat {
                    value: "1200+",
                    label: "Объектов системы",
                },
                Stat {
                    value: "24/7",
                    label: "Доступность документации",
                },
            ],
        }
    }

    /// Search releases and objects with the page predicates and no selectors.
    ///
    /// A query that is blank after trimming is rejected; otherwise the
    /// query is matched as typed.
    pub fn search(&self, q: &str) -> AppResult<SearchResults> {
        if q.trim().is_empty() {
            return Err(AppError::validation("Search query is required"));
        }

        let text = TextQuery::new(q);
        let versions = self
            .documentation
            .list(VersionQuery::new(text.clone(), Selector::All))
            .items;
        let objects = self
            .objects
            .list(ObjectQuery::new(text, Selector::All, Selector::All))
            .listing
            .items;
        let total = versions.len() + objects.len();

        info!(
            q,
            versions = versions.len(),
            objects = objects.len(),
            "Global search"
        );

        Ok(SearchResults {
            query: q.to_string(),
            versions,
            objects,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsystem_core::error::ErrorKind;
    use docsystem_dataset::Dataset;
    use docsystem_dataset::repositories::{ObjectRepository, VersionRepository};

    fn service() -> HomeService {
        let dataset = Dataset::seeded().unwrap();
        HomeService::new(
            DocumentationService::new(VersionRepository::new(dataset.clone())),
            ObjectService::new(ObjectRepository::new(dataset)),
        )
    }

    #[test]
    fn test_page_content() {
        let page = service().page();
        assert_eq!(page.features.len(), 4);
        assert_eq!(page.features[0].route, Some(Route::Documentation));
        assert_eq!(page.features[1].route, Some(Route::Objects));
        assert!(page.features[2].route.is_none());
        assert_eq!(page.stats[1].value, "1200+");
    }

    #[test]
    fn test_search_spans_both_catalogs() {
        let results = service().search("3.2").unwrap();
        assert_eq!(results.versions.len(), 1);
        assert!(results.objects.is_empty());

        let results = service().search("иванов").unwrap();
        assert_eq!(results.objects.len(), 2);
        assert_eq!(results.total, 2);
    }

    #[test]
    fn test_blank_search_is_rejected() {
        for q in ["", "   ", "\t"] {
            let err = service().search(q).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }
}
