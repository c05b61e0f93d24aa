//! Client-side routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/documentation`
    Documentation,
    /// `/objects`
    Objects,
    /// `/contacts`
    Contacts,
    /// `*`
    NotFound,
}

impl Route {
    /// Routes with a concrete path, in navigation order.
    pub const CONTENT: [Route; 4] = [
        Self::Home,
        Self::Documentation,
        Self::Objects,
        Self::Contacts,
    ];

    /// Path pattern of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Documentation => "/documentation",
            Self::Objects => "/objects",
            Self::Contacts => "/contacts",
            Self::NotFound => "*",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Documentation => "Документация",
            Self::Objects => "Объекты системы",
            Self::Contacts => "Контакты",
            Self::NotFound => "Страница не найдена",
        }
    }

    /// Resolve a browser path to a route.
    ///
    /// Query string, fragment and trailing slashes are ignored, and the
    /// comparison is ASCII case-insensitive. Anything else is `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        Self::CONTENT
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
            .unwrap_or(Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_content_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/documentation"), Route::Documentation);
        assert_eq!(Route::resolve("/objects/"), Route::Objects);
        assert_eq!(Route::resolve("/Contacts"), Route::Contacts);
    }

    #[test]
    fn test_resolve_ignores_query_and_fragment() {
        assert_eq!(Route::resolve("/objects?status=beta"), Route::Objects);
        assert_eq!(
            Route::resolve("/documentation#v3.2.0"),
            Route::Documentation
        );
        assert_eq!(Route::resolve("/?q=x"), Route::Home);
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(Route::resolve("/auth"), Route::NotFound);
        assert_eq!(Route::resolve("/objects/1"), Route::NotFound);
        assert_eq!(Route::resolve("/documentationx"), Route::NotFound);
    }
}
