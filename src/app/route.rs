// SPDX-License-Identifier: MPL-2.0
//! In-app locations and push-style navigation history.
//!
//! Locations use the web form of the service listing platform
//! (`/profile`, `/service?category=<name>`) so that they can be logged,
//! shared, and parsed back. Query values are percent-encoded when a
//! location is built, never by callers.

use url::form_urlencoded;

/// A place the user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The profile settings form.
    #[default]
    Profile,
    /// The service listing, optionally filtered by category name.
    Services { category: Option<String> },
}

impl Route {
    /// Listing filtered by the given category name.
    pub fn services_in(category: impl Into<String>) -> Self {
        Route::Services {
            category: Some(category.into()),
        }
    }

    /// Builds the location string, encoding the category name.
    #[must_use]
    pub fn to_location(&self) -> String {
        match self {
            Route::Profile => "/profile".to_string(),
            Route::Services { category: None } => "/service".to_string(),
            Route::Services {
                category: Some(name),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("category", name)
                    .finish();
                format!("/service?{query}")
            }
        }
    }

    /// Parses a location produced by [`Route::to_location`].
    ///
    /// Unknown paths yield `None`. Unknown query keys are ignored.
    #[must_use]
    pub fn parse(location: &str) -> Option<Self> {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };

        match path.trim_end_matches('/') {
            "" | "/profile" => Some(Route::Profile),
            "/service" => {
                let category = query.and_then(|q| {
                    form_urlencoded::parse(q.as_bytes())
                        .find(|(key, _)| key == "category")
                        .map(|(_, value)| value.into_owned())
                });
                Some(Route::Services { category })
            }
            _ => None,
        }
    }
}

/// Navigation history with push semantics.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Router {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            history: vec![initial],
        }
    }

    /// Pushes a route. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if self.current() != &route {
            self.history.push(route);
        }
    }

    /// Returns to the previous route. The initial route is never popped.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        // history always holds the initial route
        &self.history[self.history.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_location_is_percent_encoded() {
        let route = Route::services_in("Home & Garden");
        assert_eq!(route.to_location(), "/service?category=Home+%26+Garden");
    }

    #[test]
    fn plain_category_location_matches_web_form() {
        assert_eq!(
            Route::services_in("Plumbing").to_location(),
            "/service?category=Plumbing"
        );
    }

    #[test]
    fn reserved_characters_survive_a_parse() {
        for name in ["Home & Garden", "A/B?C=D", "Café #1", "50% off"] {
            let location = Route::services_in(name).to_location();
            assert_eq!(Route::parse(&location), Some(Route::services_in(name)));
        }
    }

    #[test]
    fn parse_handles_bare_paths() {
        assert_eq!(Route::parse("/profile"), Some(Route::Profile));
        assert_eq!(Route::parse("/"), Some(Route::Profile));
        assert_eq!(
            Route::parse("/service"),
            Some(Route::Services { category: None })
        );
        assert_eq!(Route::parse("/unknown"), None);
    }

    #[test]
    fn router_pushes_and_pops() {
        let mut router = Router::default();
        assert!(!router.can_go_back());

        router.navigate(Route::services_in("Plumbing"));
        router.navigate(Route::services_in("Plumbing"));

        assert!(router.back());
        assert_eq!(router.current(), &Route::Profile);
        assert!(!router.can_go_back());
        assert!(!router.back());
    }
}
