//! Load-time schema checks over the registry.

use studio_core::{IssueLocation, ValidationReport};

use super::store::ComponentRegistry;
use super::types::{ComponentConfig, PropConfig, PropType};

/// Checks every component in the registry.
pub fn validate_registry(registry: &ComponentRegistry) -> ValidationReport {
    let mut report = ValidationReport::new();
    for (name, config) in registry.iter() {
        report.merge(validate_component(name, config));
    }
    report
}

/// Checks one component: prop schemas, then examples against them.
pub fn validate_component(name: &str, config: &ComponentConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.component.name != name {
        report.warning(
            IssueLocation::new(name),
            format!(
                "registered as `{}` but renders `{}`",
                name, config.component.name
            ),
        );
    }

    for (prop_name, prop) in &config.props {
        validate_prop(&IssueLocation::new(name).with_prop(prop_name.clone()), prop, &mut report);
    }

    for (index, example) in config.examples.iter().enumerate() {
        for (prop_name, value) in &example.props {
            let location = IssueLocation::new(name)
                .with_example(index)
                .with_prop(prop_name.clone());
            let Some(prop) = config.props.get(prop_name) else {
                report.error(location, "example sets an undeclared prop");
                continue;
            };
            if !value.fits(prop.kind) {
                report.error(
                    location,
                    format!("{} value for a {} prop", value.shape(), prop.kind.as_str()),
                );
            } else if prop.kind == PropType::Select
                && !value.as_text().is_some_and(|v| prop.allows_option(v))
            {
                report.error(location, format!("`{}` is not one of the options", value));
            }
        }
    }

    report
}

fn validate_prop(location: &IssueLocation, prop: &PropConfig, report: &mut ValidationReport) {
    match prop.kind {
        PropType::Select => {
            if prop.options.is_empty() {
                report.error(location.clone(), "select prop without options");
            }
            match &prop.default {
                Some(default) if default.as_text().is_some_and(|v| prop.allows_option(v)) => {}
                Some(default) => report.error(
                    location.clone(),
                    format!("default `{}` is not one of the options", default),
                ),
                None => report.error(location.clone(), "select prop without default"),
            }
        }
        _ => {
            if !prop.options.is_empty() {
                report.error(
                    location.clone(),
                    format!("options given for a {} prop", prop.kind.as_str()),
                );
            }
            if let Some(default) = &prop.default {
                if !default.fits(prop.kind) {
                    report.error(
                        location.clone(),
                        format!(
                            "{} default for a {} prop",
                            default.shape(),
                            prop.kind.as_str()
                        ),
                    );
                }
            }
        }
    }

    if !prop.kind.is_editable() && prop.type_definition.is_none() && prop.default.is_none() {
        report.warning(location.clone(), "read-only prop with nothing to display");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{ComponentRef, Example, ExportType, PropValue};
    use indexmap::IndexMap;

    fn button() -> ComponentConfig {
        ComponentConfig::new(
            ComponentRef {
                name: "Button".into(),
                module_path: "@studio/ui/atoms".into(),
                export_type: ExportType::Named,
            },
            "",
        )
        .with_prop("variant", PropConfig::select(["primary", "ghost"], "primary"))
        .with_prop("disabled", PropConfig::boolean(false))
    }

    fn example(props: &[(&str, PropValue)]) -> Example {
        Example {
            label: "Example".into(),
            props: props
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<IndexMap<_, _>>(),
            children: None,
        }
    }

    #[test]
    fn well_formed_component_has_no_issues() {
        let config = button().with_example(example(&[("variant", PropValue::text("ghost"))]));
        assert_eq!(validate_component("Button", &config).count(), 0);
    }

    #[test]
    fn select_default_must_be_an_option() {
        let config = button().with_prop("size", PropConfig::select(["sm", "md"], "xl"));
        let report = validate_component("Button", &config);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].location.to_string(), "Button.size");
    }

    #[test]
    fn examples_must_use_declared_props_with_matching_shapes() {
        let config = button()
            .with_example(example(&[("tone", PropValue::text("info"))]))
            .with_example(example(&[("disabled", PropValue::text("yes"))]))
            .with_example(example(&[("variant", PropValue::text("neon"))]));
        let report = validate_component("Button", &config);
        let locations: Vec<_> = report
            .errors
            .iter()
            .map(|e| e.location.to_string())
            .collect();
        assert_eq!(
            locations,
            vec![
                "Button.examples[0].tone",
                "Button.examples[1].disabled",
                "Button.examples[2].variant",
            ]
        );
    }

    #[test]
    fn mismatched_registration_name_is_a_warning() {
        let report = validate_component("PrimaryButton", &button());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn options_on_non_select_are_rejected() {
        let mut prop = PropConfig::text("hi");
        prop.options = vec!["a".into()];
        let config = button().with_prop("label", prop);
        assert!(validate_component("Button", &config).has_errors());
    }
}
