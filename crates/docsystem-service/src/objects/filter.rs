//! System object filter predicate.

use serde::{Deserialize, Serialize};

use docsystem_core::types::{Selector, TextQuery};
use docsystem_entity::object::{ObjectStatus, SystemObject};

/// Search box plus type and status drop-downs of the objects page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectQuery {
    /// Matched case-insensitively against name and author.
    #[serde(default)]
    pub q: TextQuery,
    /// Exact object type. Any string is accepted.
    #[serde(default, rename = "type")]
    pub kind: Selector<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Selector<ObjectStatus>,
}

impl ObjectQuery {
    /// Create a query.
    pub fn new(
        q: impl Into<TextQuery>,
        kind: Selector<String>,
        status: Selector<ObjectStatus>,
    ) -> Self {
        Self {
            q: q.into(),
            kind,
            status,
        }
    }

    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        !self.q.is_empty() || !self.kind.is_all() || !self.status.is_all()
    }

    /// Whether `object` passes every filter.
    pub fn matches(&self, object: &SystemObject) -> bool {
        self.kind.admits_str(&object.kind)
            && self.status.admits(&object.status)
            && (self.q.matches_ci(&object.name) || self.q.matches_ci(&object.author))
    }
}

/// Stable filter over the catalog.
pub fn filter_objects<'a>(
    objects: &'a [SystemObject],
    query: &ObjectQuery,
) -> Vec<&'a SystemObject> {
    objects.iter().filter(|o| query.matches(o)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsystem_dataset::seed::objects::seed_objects;

    fn names(items: &[&SystemObject]) -> Vec<String> {
        items.iter().map(|o| o.name.clone()).collect()
    }

    fn only(kind: &str) -> Selector<String> {
        Selector::Only(kind.to_string())
    }

    fn search(objects: &[SystemObject], q: &str) -> Vec<String> {
        let query = ObjectQuery::new(q, Selector::All, Selector::All);
        names(&filter_objects(objects, &query))
    }

    #[test]
    fn test_author_search() {
        let objects = seed_objects().unwrap();
        let result = search(&objects, "Иванов");
        assert_eq!(result, vec!["UserAuthModule", "OldAPIHandler"]);
    }

    #[test]
    fn test_type_and_status() {
        let objects = seed_objects().unwrap();
        let query = ObjectQuery::new("", only("Модуль"), Selector::Only(ObjectStatus::Active));
        assert_eq!(
            names(&filter_objects(&objects, &query)),
            vec!["UserAuthModule", "NotificationSystem"]
        );
    }

    #[test]
    fn test_case_insensitive_author() {
        let objects = seed_objects().unwrap();
        let upper = search(&objects, "ИВАНОВ");
        let lower = search(&objects, "иванов");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let objects = seed_objects().unwrap();
        assert_eq!(search(&objects, "adminpanel"), vec!["AdminPanel"]);
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let objects = seed_objects().unwrap();
        assert_eq!(filter_objects(&objects, &ObjectQuery::default()).len(), 6);
    }

    #[test]
    fn test_unknown_type_is_accepted_and_matches_nothing() {
        let objects = seed_objects().unwrap();
        let query = ObjectQuery::new("", only("Библиотека"), Selector::All);
        assert!(filter_objects(&objects, &query).is_empty());
    }

    #[test]
    fn test_no_match_leaves_catalog_untouched() {
        let objects = seed_objects().unwrap();
        let before = objects.clone();
        assert!(search(&objects, "zzz-nonexistent").is_empty());
        assert_eq!(objects, before);
    }

    #[test]
    fn test_status_filter_never_increases_count() {
        let objects = seed_objects().unwrap();
        let kinds = [Selector::All, only("Модуль"), only("API"), only("Сервис")];
        for kind in kinds {
            let any_status = ObjectQuery::new("", kind.clone(), Selector::All);
            let base = filter_objects(&objects, &any_status).len();
            for status in ObjectStatus::ALL {
                let narrowed = ObjectQuery::new("", kind.clone(), Selector::Only(status));
                assert!(filter_objects(&objects, &narrowed).len() <= base);
            }
        }
    }

    #[test]
    fn test_query_deserializes_with_any_type_string() {
        let query: ObjectQuery = serde_json::from_value(serde_json::json!({
            "type": "Библиотека",
            "status": "all",
        }))
        .unwrap();
        assert_eq!(query.kind, only("Библиотека"));
        assert!(query.status.is_all());

        let bad = serde_json::from_value::<ObjectQuery>(serde_json::json!({ "status": "retired" }));
        assert!(bad.is_err());
    }
}
