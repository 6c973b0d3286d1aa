//! Component registry: schema types, the in-memory store, load-time
//! validation and the embedded default catalog data.

/// Embedded catalog data.
pub mod defaults;
/// Name-keyed registry store.
pub mod store;
/// Component, prop and example types.
pub mod types;
/// Load-time schema checks.
pub mod validate;

pub use store::ComponentRegistry;
pub use types::{
    CodeExample, ComponentConfig, ComponentRef, Example, ExportType, PropConfig, PropType,
    PropValue,
};
pub use validate::{validate_component, validate_registry};
