//! Site map: the route-config tree, the section allow-list and the alias table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IssueLocation, StudioError, ValidationReport};

/// Ordered mapping from path segment to route node.
pub type RouteTree = IndexMap<String, RouteNode>;

/// One node of the route-config tree. Only used for labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Human label shown in breadcrumbs and search results.
    pub label: String,
    /// Nested segments below this node.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: RouteTree,
}

impl RouteNode {
    /// Creates a leaf node.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: IndexMap::new(),
        }
    }

    /// Adds a child node, builder style.
    pub fn with_child(mut self, segment: impl Into<String>, node: RouteNode) -> Self {
        self.children.insert(segment.into(), node);
        self
    }
}

fn default_section() -> String {
    "overview".to_string()
}

/// Navigation configuration for the studio.
///
/// Validity of a section is decided by `valid_sections`, never by the
/// presence of a node in `routes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMap {
    /// Section used when the hash is empty.
    #[serde(default = "default_section")]
    pub default_section: String,
    /// Closed allow-list of section keys.
    pub valid_sections: Vec<String>,
    /// Legacy section names rewritten before validation.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    /// Label tree used for breadcrumbs and search.
    #[serde(default)]
    pub routes: RouteTree,
}

impl Default for SiteMap {
    fn default() -> Self {
        Self {
            default_section: default_section(),
            valid_sections: vec![default_section()],
            aliases: IndexMap::new(),
            routes: IndexMap::new(),
        }
    }
}

impl SiteMap {
    /// Decodes a site map from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, StudioError> {
        serde_yaml::from_str(source).map_err(|err| StudioError::load("sitemap", err))
    }

    /// Rewrites a legacy section name to its canonical key.
    /// Unknown names pass through unchanged.
    pub fn canonical_section<'a>(&'a self, section: &'a str) -> &'a str {
        self.aliases
            .get(section)
            .map(String::as_str)
            .unwrap_or(section)
    }

    /// Check if a section key is in the allow-list.
    pub fn is_valid_section(&self, section: &str) -> bool {
        self.valid_sections.iter().any(|s| s == section)
    }

    /// Check if a string names a section, directly or through an alias.
    pub fn is_known_section(&self, name: &str) -> bool {
        self.is_valid_section(self.canonical_section(name))
    }

    /// Get the route node for a top-level section.
    pub fn section_node(&self, section: &str) -> Option<&RouteNode> {
        self.routes.get(section)
    }

    /// Checks internal consistency of the navigation data.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let owner = |key: &str| IssueLocation::new(format!("sitemap.{key}"));

        if !self.is_valid_section(&self.default_section) {
            report.error(
                owner("defaultSection"),
                format!("`{}` is not a valid section", self.default_section),
            );
        }

        for (alias, target) in &self.aliases {
            if !self.is_valid_section(target) {
                report.error(
                    owner("aliases").with_prop(alias.clone()),
                    format!("alias target `{target}` is not a valid section"),
                );
            }
            if self.is_valid_section(alias) {
                report.warning(
                    owner("aliases").with_prop(alias.clone()),
                    "alias shadows a valid section and is never reachable",
                );
            }
        }

        for section in self.routes.keys() {
            if !self.is_valid_section(section) {
                report.warning(
                    owner("routes").with_prop(section.clone()),
                    "route node for a section outside the allow-list",
                );
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
defaultSection: overview
validSections: [overview, forms, templates]
aliases:
  resources: templates
  quick-start: overview
routes:
  overview:
    label: Overview
  forms:
    label: Forms
    children:
      drag-drop:
        label: Drag & Drop
"#;

    #[test]
    fn decodes_yaml_in_declaration_order() {
        let site = SiteMap::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(site.default_section, "overview");
        assert_eq!(
            site.routes.keys().collect::<Vec<_>>(),
            vec!["overview", "forms"]
        );
        let forms = site.section_node("forms").unwrap();
        assert_eq!(forms.children["drag-drop"].label, "Drag & Drop");
    }

    #[test]
    fn aliases_rewrite_to_canonical_keys() {
        let site = SiteMap::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(site.canonical_section("resources"), "templates");
        assert_eq!(site.canonical_section("forms"), "forms");
        assert!(site.is_known_section("quick-start"));
        assert!(!site.is_valid_section("quick-start"));
    }

    #[test]
    fn validation_flags_dangling_alias() {
        let mut site = SiteMap::from_yaml_str(SAMPLE).unwrap();
        site.aliases.insert("legacy".into(), "gone".into());
        let report = site.validate();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].location.prop.as_deref(), Some("legacy"));
    }

    #[test]
    fn malformed_yaml_is_a_load_error() {
        let err = SiteMap::from_yaml_str("validSections: {").unwrap_err();
        assert!(matches!(err, StudioError::Load { what: "sitemap", .. }));
    }
}
