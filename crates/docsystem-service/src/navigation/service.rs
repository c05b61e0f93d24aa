//! Navigation service.

use serde::Serialize;
use tracing::warn;

use docsystem_entity::navigation::{NAV_ITEMS, NavItem, Route};

/// Product name shown in the navigation bar.
pub const BRAND: &str = "DocSystem";

/// A navigation link with its highlight state.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    #[serde(flatten)]
    pub item: NavItem,
    pub active: bool,
}

/// Result of resolving a browser path.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRoute {
    /// Path as requested.
    pub path: String,
    pub route: Route,
    pub title: &'static str,
}

/// Navigation operations.
#[derive(Debug, Clone, Default)]
pub struct NavigationService;

impl NavigationService {
    /// Create a navigation service.
    pub fn new() -> Self {
        Self
    }

    /// Navigation items, with the one matching `current_path` marked active.
    pub fn items(&self, current_path: &str) -> Vec<NavLink> {
        NAV_ITEMS
            .iter()
            .map(|item| NavLink {
                item: *item,
                active: item.is_active(current_path),
            })
            .collect()
    }

    /// Resolve a path to one of the five routes.
    pub fn resolve(&self, path: &str) -> ResolvedRoute {
        let route = Route::resolve(path);
        if route == Route::NotFound {
            warn!(path, "Attempted to access non-existent route");
        }
        ResolvedRoute {
            path: path.to_string(),
            route,
            title: route.title(),
        }
    }
}
