#![deny(missing_docs)]
//! Design studio core: slug codec, site map, hash routing and breadcrumbs.

/// Breadcrumb trail generation.
pub mod breadcrumbs;
/// Core error and diagnostic types.
pub mod error;
/// Hash path resolution and search-target parsing.
pub mod route;
/// Navigation state machine.
pub mod router;
/// Command-palette search index.
pub mod search;
/// Site map: route tree, allow-list and aliases.
pub mod sitemap;
/// PascalCase/kebab-case codec and anchor ids.
pub mod slug;

pub use breadcrumbs::{Breadcrumb, breadcrumbs, should_render};
pub use error::{IssueLocation, SchemaIssue, Severity, StudioError, ValidationReport};
pub use route::{Resolution, Route, parse_search_target, resolve, resolve_parts};
pub use router::{NavigationEffect, RouteState, Router};
pub use search::{SearchEntry, SearchIndex};
pub use sitemap::{RouteNode, RouteTree, SiteMap};
pub use slug::{Slugger, capitalize, kebab_to_pascal, pascal_to_kebab};
