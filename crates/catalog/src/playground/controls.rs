//! Mapping from prop schema to playground controls.

use serde::Serialize;

use crate::registry::{PropConfig, PropType, PropValue};

/// Editable (or read-only) control for one prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    /// Enumerated choice.
    Select {
        /// Allowed values, in order.
        options: Vec<String>,
        /// Current value.
        value: String,
    },
    /// Two-state toggle.
    Toggle {
        /// Current value.
        value: bool,
    },
    /// Free-text field.
    TextField {
        /// Current value.
        value: String,
    },
    /// Documented but not live-editable.
    #[serde(rename_all = "camelCase")]
    ReadOnly {
        /// TypeScript signature, if documented.
        type_definition: Option<String>,
        /// Default rendered as text, if any.
        default: Option<String>,
    },
}

impl Control {
    /// The value this control currently emits, if it is editable.
    pub fn value(&self) -> Option<PropValue> {
        match self {
            Control::Select { value, .. } | Control::TextField { value } => {
                Some(PropValue::text(value.clone()))
            }
            Control::Toggle { value } => Some(PropValue::Bool(*value)),
            Control::ReadOnly { .. } => None,
        }
    }
}

/// A control together with the prop's documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropControl {
    /// Prop name.
    pub name: String,
    /// Prop documentation.
    pub description: String,
    /// Documentation only.
    pub required: bool,
    /// The control.
    pub control: Control,
}

/// Derives the control for a prop, initialized from its default.
///
/// Deterministic: the same schema always yields the same control.
pub fn derive_control(prop: &PropConfig) -> Control {
    match prop.kind {
        PropType::Select => Control::Select {
            options: prop.options.clone(),
            value: select_default(prop),
        },
        PropType::Boolean => Control::Toggle {
            value: prop.default.as_ref().and_then(PropValue::as_bool).unwrap_or(false),
        },
        PropType::Text => Control::TextField {
            value: prop
                .default
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        },
        PropType::Array | PropType::Object | PropType::Interface | PropType::Custom => {
            Control::ReadOnly {
                type_definition: prop.type_definition.clone(),
                default: prop.default.as_ref().map(ToString::to_string),
            }
        }
    }
}

/// The select default, or the first option when the default is unusable.
pub(crate) fn select_default(prop: &PropConfig) -> String {
    prop.default
        .as_ref()
        .and_then(PropValue::as_text)
        .filter(|value| prop.allows_option(value))
        .or_else(|| prop.options.first().map(String::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_starts_at_default() {
        let prop = PropConfig::select(["sm", "md", "lg"], "md");
        assert_eq!(
            derive_control(&prop),
            Control::Select {
                options: vec!["sm".into(), "md".into(), "lg".into()],
                value: "md".into(),
            }
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let props = [
            PropConfig::select(["a", "b"], "b"),
            PropConfig::boolean(true),
            PropConfig::text("hello"),
            PropConfig::new(PropType::Custom),
        ];
        for prop in &props {
            assert_eq!(derive_control(prop), derive_control(prop));
            assert_eq!(derive_control(prop).value(), derive_control(prop).value());
        }
    }

    #[test]
    fn documented_kinds_degrade_to_read_only() {
        let mut prop = PropConfig::new(PropType::Array);
        prop.default = Some(PropValue::List(vec!["React".into(), "Vue".into()]));
        prop.type_definition = Some("string[]".into());
        assert_eq!(
            derive_control(&prop),
            Control::ReadOnly {
                type_definition: Some("string[]".into()),
                default: Some(r#"["React","Vue"]"#.into()),
            }
        );
        assert_eq!(derive_control(&prop).value(), None);
    }

    #[test]
    fn numeric_text_defaults_render_as_text() {
        let mut prop = PropConfig::new(PropType::Text);
        prop.default = Some(PropValue::Number(300.0));
        assert_eq!(
            derive_control(&prop),
            Control::TextField {
                value: "300".into()
            }
        );
    }

    #[test]
    fn unusable_select_default_falls_back_to_first_option() {
        let prop = PropConfig::select(["sm", "md"], "xl");
        assert_eq!(select_default(&prop), "sm");
    }
}
