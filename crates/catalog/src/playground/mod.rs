//! Playground engine: schema-driven controls, prop state and previews.
//!
//! - `controls`: maps each `PropConfig` to an editable or read-only control.
//! - `render`: the renderer seam plus JSX and node renderers.
//! - `state`: per-session prop values, edits, preview and gallery rendering.

/// Prop schema to control mapping.
pub mod controls;
/// Component renderer seam.
pub mod render;
/// Prop state and preview rendering.
pub mod state;

pub use controls::{Control, PropControl, derive_control};
pub use render::{ComponentRenderer, JsxRenderer, NodeRenderer, PropBag, RenderNode};
pub use state::{GalleryItem, PlaygroundState, list_examples, render_gallery, render_preview};
