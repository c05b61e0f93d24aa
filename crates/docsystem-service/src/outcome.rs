//! Result of applying a page's filters to its dataset.

use serde::Serialize;

/// How the visible subset relates to the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultState {
    /// No filter is active; the whole dataset is shown.
    Unfiltered,
    /// Filters are active and at least one record passed.
    Matches,
    /// Nothing passed. The page must show its "no results" message
    /// instead of an empty table.
    NoMatch,
}

/// Visible subset of a dataset, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<T> {
    /// Records that passed every filter.
    pub items: Vec<T>,
    /// Size of the unfiltered dataset.
    pub total: usize,
    /// Whether any filter (text or selector) was active.
    pub filters_active: bool,
}

impl<T> FilterOutcome<T> {
    /// Wrap a filtered subset.
    pub fn new(items: Vec<T>, total: usize, filters_active: bool) -> Self {
        Self {
            items,
            total,
            filters_active,
        }
    }

    /// Classify the outcome.
    pub fn state(&self) -> ResultState {
        if self.items.is_empty() {
            ResultState::NoMatch
        } else if self.filters_active {
            ResultState::Matches
        } else {
            ResultState::Unfiltered
        }
    }

    /// Number of visible records.
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// Convert every visible record, keeping counts and state.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FilterOutcome<U> {
        FilterOutcome {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            filters_active: self.filters_active,
        }
    }
}

/// Serializable page listing built from a [`FilterOutcome`].
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T: Serialize> {
    /// Rows to render.
    pub items: Vec<T>,
    /// Visible row count.
    pub shown: usize,
    /// Dataset size.
    pub total: usize,
    /// Outcome classification.
    pub state: ResultState,
    /// Message to render instead of the table when `state` is `no_match`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<T: Serialize> Listing<T> {
    /// Build a listing; `empty_message` is only kept for a no-match outcome.
    pub fn from_outcome(outcome: FilterOutcome<T>, empty_message: &'static str) -> Self {
        let state = outcome.state();
        Self {
            shown: outcome.shown(),
            total: outcome.total,
            state,
            empty_message: (state == ResultState::NoMatch).then_some(empty_message),
            items: outcome.items,
        }
    }
}

/// One entry of a filter drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Wire value sent back as the query parameter.
    pub value: String,
    /// Text shown in the drop-down.
    pub label: String,
}

impl SelectOption {
    /// Create an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
