//! Breadcrumb trails derived from a route and the route-config tree.

use serde::Serialize;

use crate::error::StudioError;
use crate::route::Route;
use crate::sitemap::{RouteNode, RouteTree, SiteMap};
use crate::slug::capitalize;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Human label.
    pub label: String,
    /// Link target; `None` marks the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl std::fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.href {
            Some(href) => write!(f, "{} ({})", self.label, href),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Builds the trail from the section down to the route's item.
///
/// Never fails: segments without a route node get their raw text,
/// capitalized, as label. The last entry carries no `href`.
pub fn breadcrumbs(route: &Route, site: &SiteMap) -> Vec<Breadcrumb> {
    let mut segments: Vec<&str> = vec![route.section.as_str()];
    if !route.is_section_root() {
        segments.extend(route.item_id.split('/').filter(|s| !s.is_empty()));
    }

    let mut trail = Vec::with_capacity(segments.len());
    let mut level: Option<&RouteTree> = Some(&site.routes);

    for (depth, segment) in segments.iter().enumerate() {
        let node: Option<&RouteNode> = level.and_then(|tree| tree.get(*segment));
        let label = match node {
            Some(node) => node.label.clone(),
            None => {
                log::warn!(
                    "{}",
                    StudioError::MissingBreadcrumbLabel {
                        segment: segment.to_string()
                    }
                );
                capitalize(segment)
            }
        };
        level = node.map(|n| &n.children);

        let is_last = depth + 1 == segments.len();
        let href = (!is_last).then(|| format!("#{}", segments[..=depth].join("/")));
        trail.push(Breadcrumb { label, href });
    }

    trail
}

/// The breadcrumb bar is only shown for trails deeper than one entry.
pub fn should_render(trail: &[Breadcrumb]) -> bool {
    trail.len() > 1
}
