//! JSON-LD structured data projected from registry entries.
//!
//! One-way transform: nothing here feeds back into the registry.

use serde_json::{Map, Value as JsonValue, json};

use crate::registry::{ComponentConfig, ComponentRegistry};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Projects one component into a `SoftwareSourceCode` document.
pub fn component_json_ld(name: &str, config: &ComponentConfig) -> JsonValue {
    let properties: Vec<JsonValue> = config
        .props
        .iter()
        .map(|(prop_name, prop)| {
            let mut entry = Map::new();
            entry.insert("@type".into(), json!("PropertyValueSpecification"));
            entry.insert("name".into(), json!(prop_name));
            entry.insert("valueType".into(), json!(prop.kind.as_str()));
            entry.insert("valueRequired".into(), json!(prop.required));
            if !prop.description.is_empty() {
                entry.insert("description".into(), json!(prop.description));
            }
            if let Some(default) = &prop.default {
                entry.insert("defaultValue".into(), default.to_json());
            }
            if !prop.options.is_empty() {
                entry.insert("valueOptions".into(), json!(prop.options));
            }
            JsonValue::Object(entry)
        })
        .collect();

    let code_examples: Vec<JsonValue> = config
        .code_examples
        .iter()
        .map(|example| {
            let mut entry = Map::new();
            entry.insert("@type".into(), json!("SoftwareSourceCode"));
            entry.insert("name".into(), json!(example.title));
            entry.insert("text".into(), json!(example.code));
            if let Some(description) = &example.description {
                entry.insert("description".into(), json!(description));
            }
            JsonValue::Object(entry)
        })
        .collect();

    let mut doc = Map::new();
    doc.insert("@context".into(), json!(SCHEMA_CONTEXT));
    doc.insert("@type".into(), json!("SoftwareSourceCode"));
    doc.insert("name".into(), json!(name));
    doc.insert("description".into(), json!(config.description));
    doc.insert("programmingLanguage".into(), json!("TypeScript"));
    doc.insert("properties".into(), JsonValue::Array(properties));
    doc.insert("codeExample".into(), JsonValue::Array(code_examples));
    if let Some(url) = &config.source_url {
        doc.insert("codeRepository".into(), json!(url));
    }
    if let Some(notes) = &config.accessibility_notes {
        doc.insert("accessibilitySummary".into(), json!(notes));
    }
    JsonValue::Object(doc)
}

/// Projects the whole registry into an `ItemList`, in registry order.
pub fn catalog_json_ld(registry: &ComponentRegistry) -> JsonValue {
    let items: Vec<JsonValue> = registry
        .iter()
        .enumerate()
        .map(|(index, (name, config))| {
            let mut item = component_json_ld(name, config);
            if let Some(obj) = item.as_object_mut() {
                obj.remove("@context");
            }
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "numberOfItems": items.len(),
        "itemListElement": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::defaults::default_registry;
    use crate::registry::{CodeExample, ComponentRef, ExportType, PropConfig};
    use insta::assert_snapshot;

    fn badge() -> ComponentConfig {
        let mut config = ComponentConfig::new(
            ComponentRef {
                name: "Badge".into(),
                module_path: "@studio/ui/atoms".into(),
                export_type: ExportType::Named,
            },
            "Status label",
        )
        .with_prop("tone", PropConfig::select(["neutral", "info"], "neutral"))
        .with_prop("pill", PropConfig::boolean(false));
        config.code_examples.push(CodeExample {
            title: "Basic".into(),
            code: "<Badge>Draft</Badge>".into(),
            description: None,
        });
        config
    }

    #[test]
    fn component_document_projects_props_and_code() {
        let doc = component_json_ld("Badge", &badge());
        assert_snapshot!(serde_json::to_string_pretty(&doc).unwrap(), @r#"
        {
          "@context": "https://schema.org",
          "@type": "SoftwareSourceCode",
          "codeExample": [
            {
              "@type": "SoftwareSourceCode",
              "name": "Basic",
              "text": "<Badge>Draft</Badge>"
            }
          ],
          "description": "Status label",
          "name": "Badge",
          "programmingLanguage": "TypeScript",
          "properties": [
            {
              "@type": "PropertyValueSpecification",
              "defaultValue": "neutral",
              "name": "tone",
              "valueOptions": [
                "neutral",
                "info"
              ],
              "valueRequired": false,
              "valueType": "select"
            },
            {
              "@type": "PropertyValueSpecification",
              "defaultValue": false,
              "name": "pill",
              "valueRequired": false,
              "valueType": "boolean"
            }
          ]
        }
        "#);
    }

    #[test]
    fn optional_metadata_is_included_when_present() {
        let registry = default_registry().unwrap();
        let doc = component_json_ld("Button", registry.lookup("Button").unwrap());
        assert_eq!(
            doc["codeRepository"],
            "https://github.com/design-studio/ui/blob/main/src/atoms/Button.tsx"
        );
        assert!(doc["accessibilitySummary"].as_str().unwrap().contains("aria-label"));
        assert_eq!(doc["codeExample"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn catalog_list_numbers_items_in_order() {
        let registry = default_registry().unwrap();
        let doc = catalog_json_ld(&registry);
        assert_eq!(doc["numberOfItems"], registry.len());
        assert_eq!(doc["itemListElement"][0]["position"], 1);
        assert_eq!(doc["itemListElement"][0]["item"]["name"], "Button");
        assert!(doc["itemListElement"][0]["item"].get("@context").is_none());
    }
}
