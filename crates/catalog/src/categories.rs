//! Category/navigation index: category key to ordered component names.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use studio_core::{IssueLocation, StudioError, ValidationReport};

use crate::registry::ComponentRegistry;

/// One functional grouping of components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Menu heading.
    pub label: String,
    /// Short summary shown on the category landing page.
    #[serde(default)]
    pub description: String,
    /// Member component names, in menu order.
    #[serde(default)]
    pub components: Vec<String>,
}

/// Ordered mapping from category key to [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIndex {
    categories: IndexMap<String, Category>,
}

impl CategoryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the index from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, StudioError> {
        serde_yaml::from_str(source).map_err(|err| StudioError::load("categories", err))
    }

    /// Adds or replaces a category, builder style.
    pub fn with(mut self, key: impl Into<String>, category: Category) -> Self {
        self.categories.insert(key.into(), category);
        self
    }

    /// Get a category by key.
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Category keys in menu order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(key, c)| (key.as_str(), c))
    }

    /// Members of a category; empty for unknown keys.
    pub fn components_in_category(&self, key: &str) -> &[String] {
        self.categories
            .get(key)
            .map(|c| c.components.as_slice())
            .unwrap_or(&[])
    }

    /// Reverse lookup. Scans categories in order and returns the first
    /// one listing `component`.
    pub fn category_of(&self, component: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, c)| c.components.iter().any(|name| name == component))
            .map(|(key, _)| key.as_str())
    }

    /// Checks membership against the registry and uniqueness across categories.
    pub fn validate(&self, registry: &ComponentRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut first_seen: HashMap<&str, &str> = HashMap::new();

        for (key, category) in &self.categories {
            if category.components.is_empty() {
                report.warning(IssueLocation::new(key.clone()), "category has no components");
            }
            for name in &category.components {
                let location = IssueLocation::new(key.clone()).with_prop(name.clone());
                if !registry.contains(name) {
                    report.error(location.clone(), "component is not registered");
                }
                if let Some(previous) = first_seen.insert(name.as_str(), key.as_str()) {
                    report.error(location, format!("already listed in `{previous}`"));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ComponentConfig, ComponentRef, ExportType};

    fn category(names: &[&str]) -> Category {
        Category {
            label: "Label".into(),
            description: String::new(),
            components: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn registry(names: &[&str]) -> ComponentRegistry {
        names.iter().fold(ComponentRegistry::new(), |registry, name| {
            registry.with(
                *name,
                ComponentConfig::new(
                    ComponentRef {
                        name: name.to_string(),
                        module_path: "@studio/ui".into(),
                        export_type: ExportType::Named,
                    },
                    "",
                ),
            )
        })
    }

    #[test]
    fn members_keep_menu_order() {
        let index = CategoryIndex::new().with("forms", category(&["Select", "Checkbox"]));
        assert_eq!(index.components_in_category("forms"), ["Select", "Checkbox"]);
        assert!(index.components_in_category("missing").is_empty());
    }

    #[test]
    fn first_matching_category_wins() {
        let index = CategoryIndex::new()
            .with("atoms", category(&["Button"]))
            .with("forms", category(&["Button", "Select"]));
        assert_eq!(index.category_of("Button"), Some("atoms"));
        assert_eq!(index.category_of("Select"), Some("forms"));
        assert_eq!(index.category_of("Frobnicator"), None);
    }

    #[test]
    fn duplicates_and_unknown_members_are_errors() {
        let index = CategoryIndex::new()
            .with("atoms", category(&["Button"]))
            .with("forms", category(&["Button", "Ghost"]));
        let report = index.validate(&registry(&["Button"]));
        let messages: Vec<_> = report.errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "error at forms.Button: already listed in `atoms`",
                "error at forms.Ghost: component is not registered",
            ]
        );
    }
}
