use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use studio_catalog::{
    AppearanceContext, Catalog, StudioEvent, StudioSession, catalog_json_ld, component_json_ld,
    default_catalog,
};
use studio_core::{Resolution, breadcrumbs as trail_for};

// ============================================================================
// Studio Config
// ============================================================================

/// Configuration accepted by the [`Studio`] constructor.
///
/// All catalog documents must be given together to replace the shipped data.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmStudioConfig {
    #[serde(default)]
    pub appearance: Option<AppearanceContext>,
    #[serde(default, alias = "componentsYaml")]
    pub components_yaml: Option<String>,
    #[serde(default, alias = "categoriesYaml")]
    pub categories_yaml: Option<String>,
    #[serde(default, alias = "sitemapYaml")]
    pub sitemap_yaml: Option<String>,
}

fn parse_config(config: JsValue) -> Result<WasmStudioConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmStudioConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

fn build_catalog(cfg: &WasmStudioConfig) -> Result<Arc<Catalog>, JsError> {
    match (&cfg.components_yaml, &cfg.categories_yaml, &cfg.sitemap_yaml) {
        (Some(components), Some(categories), Some(sitemap)) => {
            log::debug!("loading catalog from host-supplied documents");
            Catalog::from_yaml(components, categories, sitemap)
                .map(Arc::new)
                .map_err(|e| JsError::new(&format!("Catalog error: {}", e)))
        }
        (None, None, None) => Ok(default_catalog()),
        _ => Err(JsError::new(
            "Catalog error: componentsYaml, categoriesYaml and sitemapYaml must be given together",
        )),
    }
}

/// Plain-object serialization so maps arrive as JS objects, not `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Stateless API
// ============================================================================

/// Resolves a hash path against the shipped site map.
///
/// Returns `{status: "found", section, itemId}` or
/// `{status: "notFound", section, itemId}`.
#[wasm_bindgen]
pub fn resolve(path: &str) -> Result<JsValue, JsError> {
    let catalog = default_catalog();
    to_js(&studio_core::resolve(path, &catalog.site))
}

/// Breadcrumb trail for a hash path; empty when the section is unknown.
#[wasm_bindgen]
pub fn breadcrumbs(path: &str) -> Result<JsValue, JsError> {
    let catalog = default_catalog();
    let trail = match studio_core::resolve(path, &catalog.site) {
        Resolution::Found(route) => trail_for(&route, &catalog.site),
        Resolution::NotFound { .. } => Vec::new(),
    };
    to_js(&trail)
}

/// Registry entry for a component, or `null` when it is not configured.
#[wasm_bindgen(js_name = lookupComponent)]
pub fn lookup_component(name: &str) -> Result<JsValue, JsError> {
    match default_catalog().registry.lookup(name) {
        Some(config) => to_js(config),
        None => Ok(JsValue::NULL),
    }
}

/// JSON-LD text for one component, or `undefined` when it is not configured.
#[wasm_bindgen(js_name = componentJsonLd)]
pub fn component_json_ld_text(name: &str) -> Option<String> {
    let catalog = default_catalog();
    let config = catalog.registry.lookup(name)?;
    Some(component_json_ld(name, config).to_string())
}

/// JSON-LD text listing every registered component.
#[wasm_bindgen(js_name = catalogJsonLd)]
pub fn catalog_json_ld_text() -> String {
    catalog_json_ld(&default_catalog().registry).to_string()
}

/// Command-palette search over every navigable page.
#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsError> {
    let index = default_catalog().search_index();
    to_js(&index.search(query))
}

// ============================================================================
// Session API
// ============================================================================

/// A single view session. The host forwards events and applies the
/// returned effects (`replaceHash`, `scrollIntoView`, `showNotFound`,
/// `saveAppearance`).
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { Studio } from './studio_wasm';
///
/// const studio = new Studio({ appearance: loadAppearance() });
/// apply(studio.dispatch({ type: "mount", hash: location.hash }));
/// window.addEventListener("hashchange", () =>
///   apply(studio.dispatch({ type: "hashChanged", hash: location.hash })));
/// render(studio.view());
/// ```
#[wasm_bindgen]
pub struct Studio {
    session: StudioSession,
}

#[wasm_bindgen]
impl Studio {
    /// Creates a session over the shipped catalog or one given in `config`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Studio, JsError> {
        let cfg = parse_config(config)?;
        let catalog = build_catalog(&cfg)?;
        let appearance = cfg.appearance.unwrap_or_default();
        Ok(Studio {
            session: StudioSession::new(catalog, appearance),
        })
    }

    /// Applies one event and returns the effects array.
    pub fn dispatch(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let event: StudioEvent = serde_wasm_bindgen::from_value(event)
            .map_err(|e| JsError::new(&format!("Invalid event: {}", e)))?;
        to_js(&self.session.dispatch(event))
    }

    /// Snapshot of everything the view draws.
    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.view())
    }
}
