//! Catalog data shipped with the studio.
//!
//! The YAML documents are compiled into the binary and decoded once at
//! startup; see [`crate::catalog::default_catalog`].

use studio_core::StudioError;

use super::store::ComponentRegistry;

/// Component registry document.
pub const COMPONENTS_YAML: &str = include_str!("../../data/components.yaml");
/// Category index document.
pub const CATEGORIES_YAML: &str = include_str!("../../data/categories.yaml");
/// Site map document.
pub const SITEMAP_YAML: &str = include_str!("../../data/sitemap.yaml");

/// Decodes the shipped component registry without validating it.
///
/// # Example
///
/// ```
/// use studio_catalog::registry::defaults::default_registry;
///
/// let registry = default_registry().unwrap();
/// assert!(registry.lookup("Button").is_some());
/// assert!(registry.lookup("Frobnicator").is_none());
/// ```
pub fn default_registry() -> Result<ComponentRegistry, StudioError> {
    ComponentRegistry::from_yaml_str(COMPONENTS_YAML)
}
