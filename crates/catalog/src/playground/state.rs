//! Per-session prop state and preview rendering.

use serde::Serialize;
use studio_core::{Slugger, StudioError};

use super::controls::{Control, PropControl, derive_control, select_default};
use super::render::{ComponentRenderer, PropBag};
use crate::registry::{ComponentConfig, ComponentRegistry, Example, PropType, PropValue};

/// Current prop values for the live preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaygroundState {
    values: PropBag,
    children: Option<String>,
}

impl PlaygroundState {
    /// Seeds state from per-prop defaults, overlaid with the first example.
    pub fn initial(config: &ComponentConfig) -> Self {
        let mut values: PropBag = config
            .props
            .iter()
            .filter_map(|(name, prop)| prop.default.clone().map(|d| (name.clone(), d)))
            .collect();

        let first = config.examples.first();
        if let Some(example) = first {
            for (name, value) in &example.props {
                values.insert(name.clone(), value.clone());
            }
        }

        Self {
            values,
            children: first.and_then(|e| e.children.clone()),
        }
    }

    /// Replaces exactly one entry. Values are not checked against the schema.
    pub fn apply_edit(&mut self, prop: impl Into<String>, value: PropValue) {
        self.values.insert(prop.into(), value);
    }

    /// Replaces the child content.
    pub fn set_children(&mut self, children: Option<String>) {
        self.children = children;
    }

    /// Current value of a prop.
    pub fn value(&self, prop: &str) -> Option<&PropValue> {
        self.values.get(prop)
    }

    /// Current child content.
    pub fn children(&self) -> Option<&str> {
        self.children.as_deref()
    }

    /// Raw values as edited.
    pub fn values(&self) -> &PropBag {
        &self.values
    }

    /// Values with stale select entries replaced by their default.
    pub fn effective_props(&self, config: &ComponentConfig) -> PropBag {
        self.values
            .iter()
            .map(|(name, value)| {
                let value = match config.props.get(name) {
                    Some(prop) if prop.kind == PropType::Select => {
                        match value.as_text().filter(|v| prop.allows_option(v)) {
                            Some(_) => value.clone(),
                            None => {
                                log::warn!(
                                    "{}",
                                    StudioError::StaleSelection {
                                        prop: name.clone(),
                                        value: value.to_string(),
                                    }
                                );
                                PropValue::text(select_default(prop))
                            }
                        }
                    }
                    _ => value.clone(),
                };
                (name.clone(), value)
            })
            .collect()
    }

    /// Resets stale select values in place.
    pub fn reconcile(&mut self, config: &ComponentConfig) {
        self.values = self.effective_props(config);
    }

    /// Controls for every prop in schema order, showing current values.
    pub fn controls(&self, config: &ComponentConfig) -> Vec<PropControl> {
        let effective = self.effective_props(config);
        config
            .props
            .iter()
            .map(|(name, prop)| {
                let mut control = derive_control(prop);
                if let Some(current) = effective.get(name) {
                    match &mut control {
                        Control::Select { value, .. } | Control::TextField { value } => {
                            if let Some(text) = current.as_text() {
                                *value = text.to_string();
                            } else if prop.kind == PropType::Text {
                                *value = current.to_string();
                            }
                        }
                        Control::Toggle { value } => {
                            if let Some(flag) = current.as_bool() {
                                *value = flag;
                            }
                        }
                        Control::ReadOnly { .. } => {}
                    }
                }
                PropControl {
                    name: name.clone(),
                    description: prop.description.clone(),
                    required: prop.required,
                    control,
                }
            })
            .collect()
    }
}

/// Renders the live preview for a registered component.
///
/// An unregistered name renders nothing; the slot stays empty.
pub fn render_preview<R: ComponentRenderer>(
    renderer: &R,
    registry: &ComponentRegistry,
    name: &str,
    state: &PlaygroundState,
) -> Option<R::Output> {
    let Some(config) = registry.lookup(name) else {
        log::warn!(
            "{}",
            StudioError::ConfigurationMissing {
                name: name.to_string()
            }
        );
        return None;
    };
    let props = state.effective_props(config);
    Some(renderer.render(&config.component, &props, state.children()))
}

/// Example presets, unchanged.
pub fn list_examples(config: &ComponentConfig) -> &[Example] {
    &config.examples
}

/// One rendered gallery preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem<T> {
    /// Unique element id on the page.
    pub anchor: String,
    /// Preset caption.
    pub label: String,
    /// Rendered output.
    pub output: T,
}

/// Renders every example preset. Examples render their own props only,
/// independent of the live preview's edits.
pub fn render_gallery<R: ComponentRenderer>(
    renderer: &R,
    config: &ComponentConfig,
) -> Vec<GalleryItem<R::Output>> {
    let mut slugger = Slugger::new();
    slugger.reserve("preview");
    list_examples(config)
        .iter()
        .map(|example| GalleryItem {
            anchor: slugger.next_slug(&example.label),
            label: example.label.clone(),
            output: renderer.render(
                &config.component,
                &example.props,
                example.children.as_deref(),
            ),
        })
        .collect()
}
