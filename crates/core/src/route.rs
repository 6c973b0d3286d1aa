//! Hash path resolution: `#<section>[/<itemId>]` to a validated [`Route`].

use serde::Serialize;

use crate::sitemap::SiteMap;

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Canonical section key from the allow-list.
    pub section: String,
    /// Item within the section; equals `section` for the section landing page.
    pub item_id: String,
}

impl Route {
    /// Creates a route without validating it.
    pub fn new(section: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            item_id: item_id.into(),
        }
    }

    /// Canonical `#section/itemId` form.
    pub fn to_hash(&self) -> String {
        format!("#{}/{}", self.section, self.item_id)
    }

    /// Whether this route is a section landing page.
    pub fn is_section_root(&self) -> bool {
        self.section == self.item_id
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Resolution {
    /// Section is in the allow-list.
    Found(Route),
    /// Section is outside the allow-list (after alias rewriting).
    #[serde(rename_all = "camelCase")]
    NotFound {
        /// Section after alias rewriting
        section: String,
        /// Item id as requested
        item_id: String,
    },
}

impl Resolution {
    /// Returns the route when resolution succeeded.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Resolution::Found(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Consumes the resolution, returning the route when found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            Resolution::Found(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Check if the section was rejected.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

/// Strips the `#` prefix, surrounding whitespace and edge slashes.
pub fn normalize_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
    trimmed.trim_matches('/')
}

/// Resolves a raw hash path against the site map.
///
/// Empty paths go to the default section. The section is split off at the
/// first `/`, rewritten through the alias table, and only then checked
/// against the allow-list. A missing item id defaults to the canonical
/// section.
pub fn resolve(raw: &str, site: &SiteMap) -> Resolution {
    let path = normalize_path(raw);
    if path.is_empty() {
        return Resolution::Found(Route::new(
            site.default_section.clone(),
            site.default_section.clone(),
        ));
    }

    let (section, item_id) = match path.split_once('/') {
        Some((section, rest)) => {
            let rest = rest.trim_matches('/');
            (section, (!rest.is_empty()).then_some(rest))
        }
        None => (path, None),
    };

    resolve_parts(section, item_id, site)
}

/// Applies alias rewriting and the allow-list check to pre-split parts.
pub fn resolve_parts(section: &str, item_id: Option<&str>, site: &SiteMap) -> Resolution {
    let section = site.canonical_section(section);
    let item_id = item_id.unwrap_or(section);

    if site.is_valid_section(section) {
        Resolution::Found(Route::new(section, item_id))
    } else {
        log::warn!("route not found: section `{}`", section);
        Resolution::NotFound {
            section: section.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

/// Parses a command-palette target.
///
/// Accepts `#section/itemId`, `section/itemId`, a bare section key or alias,
/// and the legacy `section-item` form split on the first dash. Strings that
/// name a section or alias as a whole are never split.
pub fn parse_search_target(input: &str, site: &SiteMap) -> Resolution {
    let trimmed = input.trim();
    if trimmed.starts_with('#') || trimmed.contains('/') {
        return resolve(trimmed, site);
    }
    if trimmed.is_empty() || site.is_known_section(trimmed) {
        return resolve(trimmed, site);
    }
    match trimmed.split_once('-') {
        Some((section, item)) if !section.is_empty() && !item.is_empty() => {
            resolve_parts(section, Some(item), site)
        }
        _ => resolve(trimmed, site),
    }
}
