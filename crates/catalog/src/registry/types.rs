//! Registry type definitions for components and their prop schemas.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Reference to a renderable component, opaque to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    /// Exported component name (e.g., "Button").
    pub name: String,
    /// Module path for import (e.g., "@studio/ui/atoms").
    pub module_path: String,
    /// Named or default export.
    #[serde(default)]
    pub export_type: ExportType,
}

impl ComponentRef {
    /// The import statement a code sample needs.
    pub fn import_statement(&self) -> String {
        match self.export_type {
            ExportType::Named => format!("import {{ {} }} from '{}';", self.name, self.module_path),
            ExportType::Default => format!("import {} from '{}';", self.name, self.module_path),
        }
    }
}

/// How a component is exported from its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// `export { Button }`
    #[default]
    Named,
    /// `export default Avatar`
    Default,
}

/// Closed set of prop kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    /// Enumerated string choice.
    Select,
    /// On/off flag.
    Boolean,
    /// Free text (numbers are accepted as text).
    Text,
    /// List value, documented only.
    Array,
    /// Object value, documented only.
    Object,
    /// TypeScript interface, documented only.
    Interface,
    /// Anything else (callbacks, components), documented only.
    Custom,
}

impl PropType {
    /// Whether the playground offers a live control for this kind.
    pub fn is_editable(self) -> bool {
        matches!(self, PropType::Select | PropType::Boolean | PropType::Text)
    }

    /// Lowercase name as written in the catalog data.
    pub fn as_str(self) -> &'static str {
        match self {
            PropType::Select => "select",
            PropType::Boolean => "boolean",
            PropType::Text => "text",
            PropType::Array => "array",
            PropType::Object => "object",
            PropType::Interface => "interface",
            PropType::Custom => "custom",
        }
    }
}

/// A prop value. The allowed shape depends on the prop's [`PropType`];
/// shapes are checked when the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal.
    Number(f64),
    /// String literal.
    Text(String),
    /// JSON array.
    List(Vec<JsonValue>),
    /// JSON object.
    Object(serde_json::Map<String, JsonValue>),
}

impl PropValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        PropValue::Text(value.into())
    }

    /// Returns the string for text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the flag for boolean values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this value has a shape allowed for `kind`.
    pub fn fits(&self, kind: PropType) -> bool {
        match kind {
            PropType::Select => matches!(self, PropValue::Text(_)),
            PropType::Boolean => matches!(self, PropValue::Bool(_)),
            PropType::Text => matches!(self, PropValue::Text(_) | PropValue::Number(_)),
            PropType::Array => matches!(self, PropValue::List(_)),
            PropType::Object => matches!(self, PropValue::Object(_)),
            PropType::Interface | PropType::Custom => true,
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::Text(_) => "string",
            PropValue::List(_) => "array",
            PropValue::Object(_) => "object",
        }
    }

    /// Converts to a plain JSON value.
    pub fn to_json(&self) -> JsonValue {
        match self {
            PropValue::Bool(value) => JsonValue::Bool(*value),
            // integral values print without a trailing `.0`
            PropValue::Number(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                JsonValue::from(*value as i64)
            }
            PropValue::Number(value) => serde_json::Number::from_f64(*value)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            PropValue::Text(value) => JsonValue::String(value.clone()),
            PropValue::List(items) => JsonValue::Array(items.clone()),
            PropValue::Object(map) => JsonValue::Object(map.clone()),
        }
    }
}

impl std::fmt::Display for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Text(value) => write!(f, "{}", value),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

/// Schema for one editable or documented prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropConfig {
    /// Prop kind.
    #[serde(rename = "type")]
    pub kind: PropType,
    /// Allowed values; only meaningful for `select`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
    /// Documentation only.
    #[serde(default)]
    pub required: bool,
    /// Documentation only.
    #[serde(default)]
    pub description: String,
    /// TypeScript signature shown for non-editable kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<String>,
}

impl PropConfig {
    /// Creates a schema entry of the given kind with no default.
    pub fn new(kind: PropType) -> Self {
        Self {
            kind,
            options: Vec::new(),
            default: None,
            required: false,
            description: String::new(),
            type_definition: None,
        }
    }

    /// Creates a `select` entry.
    pub fn select<I, S>(options: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default: Some(PropValue::text(default)),
            ..Self::new(PropType::Select)
        }
    }

    /// Creates a `boolean` entry.
    pub fn boolean(default: bool) -> Self {
        Self {
            default: Some(PropValue::Bool(default)),
            ..Self::new(PropType::Boolean)
        }
    }

    /// Creates a `text` entry.
    pub fn text(default: &str) -> Self {
        Self {
            default: Some(PropValue::text(default)),
            ..Self::new(PropType::Text)
        }
    }

    /// Check if `value` is one of the select options.
    pub fn allows_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// A concrete instantiation shown in the example gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Gallery caption.
    pub label: String,
    /// Prop overrides for this example.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub props: IndexMap<String, PropValue>,
    /// Child content passed to the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
}

/// A static code snippet; never executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    /// Snippet title.
    pub title: String,
    /// Source text.
    pub code: String,
    /// Optional explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full playground metadata for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    /// What to render.
    pub component: ComponentRef,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Prop schema in declaration order.
    #[serde(default)]
    pub props: IndexMap<String, PropConfig>,
    /// Gallery presets; the first one seeds the live preview.
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Static snippets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_examples: Vec<CodeExample>,
    /// Link to the component source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Accessibility guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_notes: Option<String>,
}

impl ComponentConfig {
    /// Creates a config with no props or examples.
    pub fn new(component: ComponentRef, description: impl Into<String>) -> Self {
        Self {
            component,
            description: description.into(),
            props: IndexMap::new(),
            examples: Vec::new(),
            code_examples: Vec::new(),
            source_url: None,
            accessibility_notes: None,
        }
    }

    /// Adds a prop, builder style.
    pub fn with_prop(mut self, name: impl Into<String>, prop: PropConfig) -> Self {
        self.props.insert(name.into(), prop);
        self
    }

    /// Adds an example, builder style.
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_values_decode_by_shape() {
        let values: Vec<PropValue> =
            serde_yaml::from_str("[true, 24, 0.5, primary, [a, b], {src: x}]").unwrap();
        let shapes: Vec<_> = values.iter().map(PropValue::shape).collect();
        assert_eq!(
            shapes,
            vec!["boolean", "number", "number", "string", "array", "object"]
        );
    }

    #[test]
    fn numbers_fit_text_props_but_not_select() {
        let value = PropValue::Number(300.0);
        assert!(value.fits(PropType::Text));
        assert!(!value.fits(PropType::Select));
        assert!(value.fits(PropType::Custom));
        assert_eq!(value.to_string(), "300");
    }

    #[test]
    fn import_statement_follows_export_type() {
        let mut component = ComponentRef {
            name: "Avatar".into(),
            module_path: "@studio/ui/atoms".into(),
            export_type: ExportType::Default,
        };
        assert_eq!(
            component.import_statement(),
            "import Avatar from '@studio/ui/atoms';"
        );
        component.export_type = ExportType::Named;
        assert_eq!(
            component.import_statement(),
            "import { Avatar } from '@studio/ui/atoms';"
        );
    }

    #[test]
    fn prop_config_decodes_type_key() {
        let prop: PropConfig = serde_yaml::from_str(
            "type: select\noptions: [sm, md]\ndefault: md\ntypeDefinition: Size",
        )
        .unwrap();
        assert_eq!(prop.kind, PropType::Select);
        assert!(prop.allows_option("md"));
        assert_eq!(prop.type_definition.as_deref(), Some("Size"));
        assert!(!prop.required);
    }
}
