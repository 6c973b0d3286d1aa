#![deny(missing_docs)]
//! Design studio catalog: component registry, category index, playground
//! engine, structured-data export and the session reducer.

/// Appearance context and its storage boundary.
pub mod appearance;
/// Loaded catalog aggregate and the shipped default.
pub mod catalog;
/// Category/navigation index.
pub mod categories;
/// JSON-LD export of registry entries.
pub mod jsonld;
/// Playground engine.
pub mod playground;
/// Component registry.
pub mod registry;
/// View session reducer.
pub mod session;

pub use appearance::{AppearanceContext, AppearanceStore, ColorMode, MemoryStore};
pub use catalog::{Catalog, default_catalog, try_default_catalog};
pub use categories::{Category, CategoryIndex};
pub use jsonld::{catalog_json_ld, component_json_ld};
pub use playground::{
    ComponentRenderer, Control, JsxRenderer, NodeRenderer, PlaygroundState, PropControl,
    RenderNode, derive_control, list_examples, render_gallery, render_preview,
};
pub use registry::{
    ComponentConfig, ComponentRef, ComponentRegistry, Example, PropConfig, PropType, PropValue,
};
pub use session::{PlaygroundTab, StudioEffect, StudioEvent, StudioSession, StudioView};
