//! Free-text search query shared by every filterable page.

use serde::{Deserialize, Serialize};

/// A free-text query as typed into a search box.
///
/// The lowercase form is computed once so that matching a whole dataset
/// folds the needle only one time. Folding uses Unicode lowercase, which
/// covers Cyrillic author names and titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TextQuery {
    raw: String,
    folded: String,
}

impl TextQuery {
    /// Create a query from user input. The input is kept verbatim,
    /// whitespace included.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The query exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive substring match.
    pub fn matches_ci(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.folded)
    }

    /// Case-sensitive substring match, used for version strings.
    pub fn matches_exact(&self, haystack: &str) -> bool {
        haystack.contains(&self.raw)
    }
}

impl From<String> for TextQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for TextQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<TextQuery> for String {
    fn from(query: TextQuery) -> Self {
        query.raw
    }
}
