//! The loaded catalog: registry, category index and site map together.

use std::sync::Arc;

use once_cell::sync::Lazy;
use studio_core::{
    IssueLocation, Route, RouteNode, SearchIndex, SiteMap, StudioError, ValidationReport,
    kebab_to_pascal, pascal_to_kebab,
};

use crate::categories::CategoryIndex;
use crate::registry::defaults::{CATEGORIES_YAML, COMPONENTS_YAML, SITEMAP_YAML};
use crate::registry::{ComponentRegistry, validate_registry};

/// Immutable reference data for one studio instance.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Component name to playground metadata.
    pub registry: ComponentRegistry,
    /// Category key to member names.
    pub categories: CategoryIndex,
    /// Navigation data, shared with routers.
    pub site: Arc<SiteMap>,
}

impl Catalog {
    /// Assembles and validates a catalog.
    ///
    /// Category members without a route node get one, labelled with the
    /// component name, so breadcrumbs and search cover every component.
    pub fn new(
        registry: ComponentRegistry,
        categories: CategoryIndex,
        mut site: SiteMap,
    ) -> Result<Self, StudioError> {
        for (key, category) in categories.iter() {
            let node = site
                .routes
                .entry(key.to_string())
                .or_insert_with(|| RouteNode::leaf(category.label.clone()));
            for name in &category.components {
                node.children
                    .entry(pascal_to_kebab(name))
                    .or_insert_with(|| RouteNode::leaf(name.clone()));
            }
        }

        let catalog = Self {
            registry,
            categories,
            site: Arc::new(site),
        };
        catalog.validate().into_result()?;
        Ok(catalog)
    }

    /// Decodes the three YAML documents and assembles a catalog.
    pub fn from_yaml(components: &str, categories: &str, sitemap: &str) -> Result<Self, StudioError> {
        Self::new(
            ComponentRegistry::from_yaml_str(components)?,
            CategoryIndex::from_yaml_str(categories)?,
            SiteMap::from_yaml_str(sitemap)?,
        )
    }

    /// Runs every load-time check.
    pub fn validate(&self) -> ValidationReport {
        let mut report = validate_registry(&self.registry);
        report.merge(self.categories.validate(&self.registry));
        report.merge(self.site.validate());
        for key in self.categories.keys() {
            if !self.site.is_valid_section(key) {
                report.error(
                    IssueLocation::new(key),
                    "category is not a valid section and cannot be navigated to",
                );
            }
        }
        report
    }

    /// Where a component lives in the navigation tree.
    pub fn component_route(&self, name: &str) -> Option<Route> {
        self.categories
            .category_of(name)
            .map(|category| Route::new(category, pascal_to_kebab(name)))
    }

    /// The component a route points at, if its section is a category.
    ///
    /// Members are matched by their kebab-case slug first; otherwise the
    /// item id is converted back to PascalCase, which may name an
    /// unregistered component.
    pub fn component_for_route(&self, route: &Route) -> Option<String> {
        let category = self.categories.get(&route.section)?;
        if route.is_section_root() {
            return category.components.first().cloned();
        }
        category
            .components
            .iter()
            .find(|name| pascal_to_kebab(name) == route.item_id)
            .cloned()
            .or_else(|| Some(kebab_to_pascal(&route.item_id)))
    }

    /// Command-palette index over the site map.
    pub fn search_index(&self) -> SearchIndex {
        SearchIndex::build(&self.site)
    }
}

static DEFAULT_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| match try_default_catalog() {
    Ok(catalog) => Arc::new(catalog),
    Err(err) => {
        log::error!("shipped catalog failed to load: {}", err);
        Arc::new(Catalog::default())
    }
});

/// Decodes and validates the shipped catalog.
pub fn try_default_catalog() -> Result<Catalog, StudioError> {
    Catalog::from_yaml(COMPONENTS_YAML, CATEGORIES_YAML, SITEMAP_YAML)
}

/// The shipped catalog, decoded once per process. Degrades to an empty
/// catalog if the embedded data is broken.
pub fn default_catalog() -> Arc<Catalog> {
    Arc::clone(&DEFAULT_CATALOG)
}
