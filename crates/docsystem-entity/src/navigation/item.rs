//! Navigation bar items.

use serde::Serialize;

use super::route::Route;

/// A link in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Target route.
    pub route: Route,
    /// Link path.
    pub path: &'static str,
    /// Link text.
    pub label: &'static str,
    /// Icon name.
    pub icon: &'static str,
}

impl NavItem {
    /// Whether this item should be highlighted for the current path.
    pub fn is_active(&self, current_path: &str) -> bool {
        Route::resolve(current_path) == self.route
    }
}

/// Navigation bar contents, in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: Route::Home,
        path: "/",
        label: "Главная",
        icon: "Home",
    },
    NavItem {
        route: Route::Documentation,
        path: "/documentation",
        label: "Документация",
        icon: "FileText",
    },
    NavItem {
        route: Route::Objects,
        path: "/objects",
        label: "Объекты системы",
        icon: "Database",
    },
    NavItem {
        route: Route::Contacts,
        path: "/contacts",
        label: "Контакты",
        icon: "MapPin",
    },
];
