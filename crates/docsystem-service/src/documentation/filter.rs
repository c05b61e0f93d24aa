//! Release filter predicate.

use serde::{Deserialize, Serialize};

use docsystem_core::types::{Selector, TextQuery};
use docsystem_entity::version::{Version, VersionType};

/// Search box plus type drop-down of the documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionQuery {
    /// Matched against the title (case-insensitive) and the version string.
    #[serde(default)]
    pub q: TextQuery,
    /// Release type selector.
    #[serde(default, rename = "type")]
    pub kind: Selector<VersionType>,
}

impl VersionQuery {
    /// Create a query.
    pub fn new(q: impl Into<TextQuery>, kind: Selector<VersionType>) -> Self {
        Self { q: q.into(), kind }
    }

    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        !self.q.is_empty() || !self.kind.is_all()
    }

    /// Whether `version` passes the filter.
    pub fn matches(&self, version: &Version) -> bool {
        let matches_type = self.kind.admits(&version.kind);
        let matches_search =
            self.q.matches_ci(&version.title) || self.q.matches_exact(&version.version);
        matches_type && matches_search
    }
}

/// Stable filter: keeps source order, never re-sorts.
pub fn filter_versions<'a>(versions: &'a [Version], query: &VersionQuery) -> Vec<&'a Version> {
    versions.iter().filter(|v| query.matches(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsystem_dataset::seed::versions::seed_versions;

    fn ids(items: &[&Version]) -> Vec<u32> {
        items.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let versions = seed_versions().unwrap();
        let result = filter_versions(&versions, &VersionQuery::default());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_type_major_only() {
        let versions = seed_versions().unwrap();
        let query = VersionQuery::new("", Selector::Only(VersionType::Major));
        let result = filter_versions(&versions, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].version, "3.2.0");
    }

    #[test]
    fn test_search_by_version_substring() {
        let versions = seed_versions().unwrap();
        let result = filter_versions(&versions, &VersionQuery::new("3.1", Selector::All));
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let versions = seed_versions().unwrap();
        let upper = filter_versions(&versions, &VersionQuery::new("ФИЛЬТРАЦИИ", Selector::All));
        let lower = filter_versions(&versions, &VersionQuery::new("фильтрации", Selector::All));
        assert_eq!(ids(&upper), vec![3]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn test_search_and_type_are_conjunctive() {
        let versions = seed_versions().unwrap();
        let query = VersionQuery::new("3.1", Selector::Only(VersionType::Patch));
        assert_eq!(ids(&filter_versions(&versions, &query)), vec![2]);
    }

    #[test]
    fn test_no_match_leaves_dataset_untouched() {
        let versions = seed_versions().unwrap();
        let before = versions.clone();
        let query = VersionQuery::new("zzz-nonexistent", Selector::All);
        let result = filter_versions(&versions, &query);
        assert!(result.is_empty());
        assert_eq!(versions, before);
    }

    #[test]
    fn test_subset_and_idempotent_for_every_selector() {
        let versions = seed_versions().unwrap();
        let selectors = [
            Selector::All,
            Selector::Only(VersionType::Major),
            Selector::Only(VersionType::Minor),
            Selector::Only(VersionType::Patch),
        ];
        for q in ["", "3", "обновление", "zzz"] {
            for kind in &selectors {
                let query = VersionQuery::new(q, kind.clone());
                let first = filter_versions(&versions, &query);
                let second = filter_versions(&versions, &query);
                assert_eq!(first, second);

                let positions: Vec<usize> = first
                    .iter()
                    .map(|v| versions.iter().position(|s| s.id == v.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_query_deserializes_from_url_params() {
        let query: VersionQuery = serde_json::from_value(serde_json::json!({
            "q": "3.2",
            "type": "minor",
        }))
        .unwrap();
        assert_eq!(query.q.as_str(), "3.2");
        assert_eq!(query.kind, Selector::Only(VersionType::Minor));
        assert!(query.is_active());
        assert!(!VersionQuery::default().is_active());
    }
}
