//! Renderer seam: turns a component reference plus a prop bag into output.
//!
//! The playground never looks inside a component. A host supplies a
//! [`ComponentRenderer`]; two are provided here: [`JsxRenderer`] for the
//! copyable code sample and [`NodeRenderer`] for handing a mountable tree
//! to the browser.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::registry::{ComponentRef, PropValue};

/// Prop values in schema order.
pub type PropBag = IndexMap<String, PropValue>;

/// Produces visual (or descriptive) output for a component instance.
pub trait ComponentRenderer {
    /// What a render produces.
    type Output;

    /// Renders `component` with `props` and optional child content.
    fn render(&self, component: &ComponentRef, props: &PropBag, children: Option<&str>)
    -> Self::Output;
}

/// Renders JSX source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsxRenderer {
    /// Prefix the sample with the component's import statement.
    pub with_import: bool,
    /// Leave out props that are `false`.
    pub omit_false: bool,
}

impl JsxRenderer {
    /// Renderer for the playground's "Code" tab.
    pub fn code_sample() -> Self {
        Self {
            with_import: true,
            omit_false: true,
        }
    }
}

impl ComponentRenderer for JsxRenderer {
    type Output = String;

    fn render(&self, component: &ComponentRef, props: &PropBag, children: Option<&str>) -> String {
        let mut out = String::new();
        if self.with_import {
            out.push_str(&component.import_statement());
            out.push_str("\n\n");
        }

        out.push('<');
        out.push_str(&component.name);
        for (name, value) in props {
            if self.omit_false && value == &PropValue::Bool(false) {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str(&jsx_attribute_value(value));
        }

        match children.filter(|c| !c.is_empty()) {
            Some(children) => {
                out.push('>');
                out.push_str(&jsx_text(children));
                out.push_str("</");
                out.push_str(&component.name);
                out.push('>');
            }
            None => out.push_str(" />"),
        }
        out
    }
}

/// `="text"`, `` (bare flag), `={false}`, `={42}` or `={json}`.
fn jsx_attribute_value(value: &PropValue) -> String {
    match value {
        PropValue::Text(text) => format!(
            "=\"{}\"",
            html_escape::encode_double_quoted_attribute(text)
        ),
        PropValue::Bool(true) => String::new(),
        other => format!("={{{}}}", other.to_json()),
    }
}

/// Escapes markup and braces in JSX text children.
fn jsx_text(text: &str) -> String {
    let encoded = html_escape::encode_text(text);
    let mut out = String::with_capacity(encoded.len());
    for ch in encoded.chars() {
        match ch {
            '{' => out.push_str("{'{'}"),
            '}' => out.push_str("{'}'}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializable description of a component instance for the host to mount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    /// Exported component name.
    pub component: String,
    /// Module to import it from.
    pub module_path: String,
    /// Props as plain JSON.
    pub props: IndexMap<String, JsonValue>,
    /// Child content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
}

/// Renders [`RenderNode`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeRenderer;

impl ComponentRenderer for NodeRenderer {
    type Output = RenderNode;

    fn render(
        &self,
        component: &ComponentRef,
        props: &PropBag,
        children: Option<&str>,
    ) -> RenderNode {
        RenderNode {
            component: component.name.clone(),
            module_path: component.module_path.clone(),
            props: props
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
            children: children.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExportType;
    use insta::assert_snapshot;
    use serde_json::json;

    fn button() -> ComponentRef {
        ComponentRef {
            name: "Button".into(),
            module_path: "@studio/ui/atoms".into(),
            export_type: ExportType::Named,
        }
    }

    fn props() -> PropBag {
        let mut props = PropBag::new();
        props.insert("variant".into(), PropValue::text("primary"));
        props.insert("disabled".into(), PropValue::Bool(false));
        props.insert("loading".into(), PropValue::Bool(true));
        props.insert("tabIndex".into(), PropValue::Number(2.0));
        props
    }

    #[test]
    fn code_sample_includes_import_and_children() {
        let code = JsxRenderer::code_sample().render(&button(), &props(), Some("Save"));
        assert_snapshot!(code, @r#"
        import { Button } from '@studio/ui/atoms';

        <Button variant="primary" loading tabIndex={2}>Save</Button>
        "#);
    }

    #[test]
    fn plain_jsx_keeps_false_flags_and_self_closes() {
        let code = JsxRenderer::default().render(&button(), &props(), None);
        assert_eq!(
            code,
            r#"<Button variant="primary" disabled={false} loading tabIndex={2} />"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let mut props = PropBag::new();
        props.insert("title".into(), PropValue::text(r#"Say "hi""#));
        let code = JsxRenderer::default().render(&button(), &props, Some("a < b {x}"));
        assert_eq!(
            code,
            r#"<Button title="Say &quot;hi&quot;">a &lt; b {'{'}x{'}'}</Button>"#
        );
    }

    #[test]
    fn node_renderer_emits_plain_json() {
        let node = NodeRenderer.render(&button(), &props(), Some("Save"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "component": "Button",
                "modulePath": "@studio/ui/atoms",
                "props": {"variant": "primary", "disabled": false, "loading": true, "tabIndex": 2},
                "children": "Save",
            })
        );
    }
}
