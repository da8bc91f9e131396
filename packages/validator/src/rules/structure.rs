use super::join_path;
use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};

/// Structural checks: the definition must be an object, carry the required
/// keys, and its children must be objects or JSON primitives.
pub struct StructureRule;

impl StructureRule {
    /// Checks that apply only to the tree root.
    pub fn check_root(definition: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(object) = definition.as_object() else {
            diagnostics.push(Diagnostic::error(
                "structure",
                "",
                "Component definition must be an object",
            ));
            return diagnostics;
        };

        if !object.contains_key("type") {
            diagnostics.push(
                Diagnostic::error("structure", "type", "Missing required field 'type'")
                    .with_suggestion("Add a 'type' field naming the element or component"),
            );
        }

        if !object.contains_key("children") {
            diagnostics.push(
                Diagnostic::error("structure", "children", "Missing required field 'children'")
                    .with_suggestion("Add a 'children' field (null, text, or a list of nodes)"),
            );
        }

        diagnostics
    }

    /// Checks that apply to every node, root included.
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        match node.get("type") {
            Some(Value::String(tag)) if !tag.is_empty() => {}
            Some(Value::String(_)) => {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "type"),
                    "Field 'type' must not be empty",
                ));
            }
            Some(_) => {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "type"),
                    "Field 'type' must be a string",
                ));
            }
            None if !path.is_empty() => {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "type"),
                    "Nested node is missing required field 'type'",
                ));
            }
            // The root missing 'type' is reported by check_root.
            None => {}
        }

        if let Some(children) = node.get("children") {
            diagnostics.extend(Self::check_children(path, children));
        }

        if let Some(props) = node.get("props") {
            if !props.is_object() {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "props"),
                    "Field 'props' must be an object",
                ));
            }
        }

        if let Some(events) = node.get("events") {
            if !events.is_object() {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "events"),
                    "Field 'events' must be an object",
                ));
            }
        }

        if let Some(styles) = node.get("styles") {
            if !styles.is_object() {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "styles"),
                    "Field 'styles' must be an object",
                ));
            }
        }

        diagnostics
    }

    fn check_children(path: &str, children: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        match children {
            Value::Null | Value::String(_) => {}
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    // Object children are validated recursively by the
                    // engine; here we only reject invalid shapes.
                    if item.is_array() {
                        diagnostics.push(Diagnostic::error(
                            "structure",
                            join_path(path, &format!("children[{}]", index)),
                            "Child nodes must be objects or primitives, not nested arrays",
                        ));
                    }
                }
            }
            _ => {
                diagnostics.push(Diagnostic::error(
                    "structure",
                    join_path(path, "children"),
                    "Field 'children' must be null, a string, or a list of nodes",
                ));
            }
        }

        diagnostics
    }

    /// Event handler specs must be a code string or `{parameters, handler}`.
    pub fn check_event_specs(path: &str, events: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (event, spec) in events {
            let field = join_path(path, &format!("events.{}", event));
            match spec {
                Value::String(_) => {}
                Value::Object(object) => {
                    if !object.get("handler").is_some_and(|h| h.is_string()) {
                        diagnostics.push(
                            Diagnostic::error(
                                "event-handler",
                                field,
                                "Structured handler spec is missing a string 'handler' field",
                            )
                            .with_suggestion("Use a code string or {\"parameters\": [...], \"handler\": \"...\"}"),
                        );
                    }
                }
                _ => {
                    diagnostics.push(Diagnostic::error(
                        "event-handler",
                        field,
                        "Event handler must be a code string or a handler spec object",
                    ));
                }
            }
        }

        diagnostics
    }
}
