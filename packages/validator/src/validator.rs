use crate::diagnostic::{Diagnostic, ValidationReport};
use crate::rules::{AngularRule, ElementRule, ReactRule, StructureRule, VanillaRule, VueRule};
use blueprint_schema::Framework;
use serde_json::{Map, Value};

/// Options for configuring validation
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Run framework-specific prop convention checks
    pub validate_props: bool,
    /// Check event handler spec shapes
    pub validate_events: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            validate_props: true,
            validate_events: true,
        }
    }
}

/// Validate a raw component definition against structural rules and the
/// target framework's conventions.
///
/// Works on untyped JSON so malformed input can be diagnosed before a typed
/// parse is attempted. Validation never fails itself: every rule is total
/// over arbitrary JSON, and the worst possible input yields a report, not a
/// panic. Generation is intentionally not blocked by a failed report;
/// enforcement is the caller's policy decision.
pub fn validate_component(
    component_type: &str,
    definition: &Value,
    framework: Framework,
    options: &ValidateOptions,
) -> ValidationReport {
    let mut diagnostics = StructureRule::check_root(definition);

    if let Some(root) = definition.as_object() {
        validate_node("", root, framework, options, &mut diagnostics);

        if framework == Framework::React {
            diagnostics.extend(ReactRule::check_tree_size(count_nodes(root)));
        }
    }

    if component_type.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "component-type",
            "",
            "Component type name is empty",
        ));
    }

    ValidationReport::from_diagnostics(diagnostics)
}

fn validate_node(
    path: &str,
    node: &Map<String, Value>,
    framework: Framework,
    options: &ValidateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) {
    diagnostics.extend(StructureRule::check_node(path, node));
    diagnostics.extend(ElementRule::check_node(path, node));

    if options.validate_props {
        match framework {
            Framework::React => diagnostics.extend(ReactRule::check_node(path, node)),
            Framework::Vue => diagnostics.extend(VueRule::check_node(path, node)),
            Framework::Angular => diagnostics.extend(AngularRule::check_node(path, node)),
            Framework::Vanilla => diagnostics.extend(VanillaRule::check_node(path, node)),
        }
    }

    if options.validate_events {
        if let Some(events) = node.get("events").and_then(|v| v.as_object()) {
            diagnostics.extend(StructureRule::check_event_specs(path, events));
        }
    }

    // Recurse into object children; primitive children are text nodes.
    if let Some(Value::Array(children)) = node.get("children") {
        for (index, child) in children.iter().enumerate() {
            if let Some(child_object) = child.as_object() {
                let child_path = if path.is_empty() {
                    format!("children[{}]", index)
                } else {
                    format!("{}.children[{}]", path, index)
                };
                validate_node(&child_path, child_object, framework, options, diagnostics);
            }
        }
    }
}

fn count_nodes(node: &Map<String, Value>) -> usize {
    let mut count = 1;
    if let Some(Value::Array(children)) = node.get("children") {
        for child in children {
            if let Some(child_object) = child.as_object() {
                count += count_nodes(child_object);
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_type_invalidates() {
        let report = validate_component(
            "Button",
            &json!({ "children": null }),
            Framework::React,
            &ValidateOptions::default(),
        );
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|d| d.field == "type"));
    }

    #[test]
    fn test_class_prop_warns_but_stays_valid() {
        let report = validate_component(
            "Button",
            &json!({
                "type": "button",
                "props": { "class": "cta" },
                "children": "Click me",
                "events": { "click": "doSomething()" }
            }),
            Framework::React,
            &ValidateOptions::default(),
        );
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|d| d.field.contains("class")));
    }

    #[test]
    fn test_well_formed_button_is_valid() {
        let report = validate_component(
            "Button",
            &json!({
                "type": "button",
                "props": { "className": "cta" },
                "children": "Click me",
                "events": { "click": "doSomething()" }
            }),
            Framework::React,
            &ValidateOptions::default(),
        );
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_nested_nodes_are_checked() {
        let report = validate_component(
            "Gallery",
            &json!({
                "type": "div",
                "children": [
                    { "type": "img", "props": { "alt": "x" }, "children": null }
                ]
            }),
            Framework::Vanilla,
            &ValidateOptions::default(),
        );
        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|d| d.field == "children[0].props.src"));
    }

    #[test]
    fn test_prop_checks_can_be_disabled() {
        let options = ValidateOptions {
            validate_props: false,
            validate_events: true,
        };
        let report = validate_component(
            "Button",
            &json!({
                "type": "button",
                "props": { "class": "cta" },
                "children": "Click",
                "events": { "click": "go()" }
            }),
            Framework::React,
            &options,
        );
        assert!(report.warnings.iter().all(|d| d.rule != "react-class-prop"));
    }

    #[test]
    fn test_validation_never_panics_on_garbage() {
        for garbage in [json!(null), json!(42), json!("x"), json!([[[]]]), json!({})] {
            let report = validate_component(
                "X",
                &garbage,
                Framework::Angular,
                &ValidateOptions::default(),
            );
            assert!(!report.is_valid);
        }
    }
}
