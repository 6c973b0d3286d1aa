//! Navigation state machine over the hash path.
//!
//! The router never touches the browser. Each transition returns the
//! [`NavigationEffect`]s the host must apply: internal navigation replaces
//! the hash (never pushes), and only externally triggered hash changes
//! scroll the target into view.

use std::sync::Arc;

use serde::Serialize;

use crate::breadcrumbs::{Breadcrumb, breadcrumbs};
use crate::route::{Resolution, Route, normalize_path, parse_search_target, resolve, resolve_parts};
use crate::sitemap::SiteMap;

/// Current navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteState {
    /// Nothing mounted yet.
    #[default]
    Uninitialized,
    /// A valid section is shown.
    Active(Route),
    /// The requested section is outside the allow-list.
    NotFound {
        /// Section after alias rewriting
        requested: String,
    },
}

/// Side effect the host applies after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationEffect {
    /// `history.replaceState` with the canonical hash.
    ReplaceHash {
        /// Canonical `#section/itemId`
        hash: String,
    },
    /// Scroll the element with this id into view.
    ScrollIntoView {
        /// Element id
        anchor: String,
    },
    /// Replace the whole view with the not-found page.
    ShowNotFound {
        /// Rejected section
        section: String,
    },
}

/// Hash router bound to one site map.
#[derive(Debug, Clone)]
pub struct Router {
    site: Arc<SiteMap>,
    state: RouteState,
}

impl Router {
    /// Creates an uninitialized router.
    pub fn new(site: Arc<SiteMap>) -> Self {
        Self {
            site,
            state: RouteState::Uninitialized,
        }
    }

    /// The site map this router resolves against.
    pub fn site(&self) -> &SiteMap {
        &self.site
    }

    /// Current state.
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Active route, if any.
    pub fn current(&self) -> Option<&Route> {
        match &self.state {
            RouteState::Active(route) => Some(route),
            _ => None,
        }
    }

    /// Initial read of the address bar hash.
    ///
    /// A non-empty hash that is not already canonical is rewritten in place.
    pub fn mount(&mut self, raw: &str) -> Vec<NavigationEffect> {
        let resolution = resolve(raw, &self.site);
        let mut effects = Vec::new();
        if let Resolution::Found(route) = &resolution {
            if !normalize_path(raw).is_empty() && !is_canonical(raw, route) {
                effects.push(NavigationEffect::ReplaceHash {
                    hash: route.to_hash(),
                });
            }
        }
        self.enter(resolution, &mut effects);
        effects
    }

    /// External hash change (back/forward, manual edit).
    pub fn hash_changed(&mut self, raw: &str) -> Vec<NavigationEffect> {
        let resolution = resolve(raw, &self.site);
        let mut effects = Vec::new();
        if let Resolution::Found(route) = &resolution {
            if self.current() == Some(route) {
                return effects;
            }
            if !normalize_path(raw).is_empty() && !is_canonical(raw, route) {
                effects.push(NavigationEffect::ReplaceHash {
                    hash: route.to_hash(),
                });
            }
            effects.push(NavigationEffect::ScrollIntoView {
                anchor: route.item_id.clone(),
            });
        }
        self.enter(resolution, &mut effects);
        effects
    }

    /// Programmatic navigation to a section and optional item.
    pub fn navigate_to(&mut self, section: &str, item_id: Option<&str>) -> Vec<NavigationEffect> {
        let resolution = resolve_parts(section, item_id, &self.site);
        self.navigate_resolved(resolution)
    }

    /// Programmatic navigation from a command-palette target.
    pub fn navigate(&mut self, target: &str) -> Vec<NavigationEffect> {
        let resolution = parse_search_target(target, &self.site);
        self.navigate_resolved(resolution)
    }

    /// Breadcrumbs for the active route; empty otherwise.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.current()
            .map(|route| breadcrumbs(route, &self.site))
            .unwrap_or_default()
    }

    fn navigate_resolved(&mut self, resolution: Resolution) -> Vec<NavigationEffect> {
        let mut effects = Vec::new();
        if let Resolution::Found(route) = &resolution {
            if self.current() == Some(route) {
                return effects;
            }
            effects.push(NavigationEffect::ReplaceHash {
                hash: route.to_hash(),
            });
        }
        self.enter(resolution, &mut effects);
        effects
    }

    fn enter(&mut self, resolution: Resolution, effects: &mut Vec<NavigationEffect>) {
        match resolution {
            Resolution::Found(route) => {
                log::debug!("navigate: {}", route.to_hash());
                self.state = RouteState::Active(route);
            }
            Resolution::NotFound { section, .. } => {
                effects.push(NavigationEffect::ShowNotFound {
                    section: section.clone(),
                });
                self.state = RouteState::NotFound { requested: section };
            }
        }
    }
}

fn is_canonical(raw: &str, route: &Route) -> bool {
    let path = normalize_path(raw);
    path == &route.to_hash()[1..] || (route.is_section_root() && path == route.section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn router() -> Router {
        let site = SiteMap::from_yaml_str(
            r#"
validSections: [overview, forms, templates]
aliases:
  resources: templates
routes:
  forms:
    label: Forms
    children:
      drag-drop:
        label: Drag & Drop
"#,
        )
        .unwrap();
        Router::new(Arc::new(site))
    }

    #[test]
    fn mount_with_empty_hash_defaults_without_effects() {
        let mut router = router();
        assert_eq!(router.state(), &RouteState::Uninitialized);
        assert!(router.mount("").is_empty());
        assert_eq!(router.current(), Some(&Route::new("overview", "overview")));
        assert!(router.breadcrumbs().len() <= 1);
    }

    #[test]
    fn mount_canonicalizes_aliases() {
        let mut router = router();
        let effects = router.mount("#resources");
        assert_eq!(
            effects,
            vec![NavigationEffect::ReplaceHash {
                hash: "#templates/templates".into()
            }]
        );
    }

    #[test]
    fn mount_keeps_canonical_hashes() {
        let mut router = router();
        assert!(router.mount("#forms/drag-drop").is_empty());
        assert!(router.mount("#forms").is_empty());
    }

    #[test]
    fn unknown_section_shows_not_found_until_valid_path() {
        let mut router = router();
        let effects = router.mount("#nope/drag-drop");
        assert_eq!(
            effects,
            vec![NavigationEffect::ShowNotFound {
                section: "nope".into()
            }]
        );
        assert_eq!(
            router.state(),
            &RouteState::NotFound {
                requested: "nope".into()
            }
        );
        assert!(router.breadcrumbs().is_empty());

        router.hash_changed("#forms");
        assert_eq!(router.current(), Some(&Route::new("forms", "forms")));
    }

    #[test]
    fn programmatic_navigation_replaces_without_scrolling() {
        let mut router = router();
        router.mount("");
        let effects = router.navigate_to("forms", Some("drag-drop"));
        assert_eq!(
            effects,
            vec![NavigationEffect::ReplaceHash {
                hash: "#forms/drag-drop".into()
            }]
        );
        // same target twice is a no-op
        assert!(router.navigate("#forms/drag-drop").is_empty());
    }

    #[test]
    fn programmatic_navigation_revalidates() {
        let mut router = router();
        router.mount("#forms");
        let effects = router.navigate_to("resources", None);
        assert_eq!(router.current(), Some(&Route::new("templates", "templates")));
        assert_eq!(effects.len(), 1);

        let effects = router.navigate("frob-nicator");
        assert!(matches!(
            effects.as_slice(),
            [NavigationEffect::ShowNotFound { .. }]
        ));
    }

    #[test]
    fn external_hash_change_scrolls() {
        let mut router = router();
        router.mount("");
        let effects = router.hash_changed("#forms/drag-drop");
        assert_eq!(
            effects,
            vec![NavigationEffect::ScrollIntoView {
                anchor: "drag-drop".into()
            }]
        );
        assert!(router.hash_changed("#forms/drag-drop").is_empty());
    }
}
