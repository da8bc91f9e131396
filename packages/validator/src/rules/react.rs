use super::{join_path, node_props};
use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};

/// React naming conventions: reserved prop names and HTML-isms that React
/// spells differently.
pub struct ReactRule;

const RESERVED_PROPS: [&str; 3] = ["key", "ref", "children"];

impl ReactRule {
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(props) = node_props(node) else {
            return diagnostics;
        };

        for name in props.keys() {
            if RESERVED_PROPS.contains(&name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "react-reserved-prop",
                        join_path(path, &format!("props.{}", name)),
                        format!("'{}' is a reserved React prop and is managed by React itself", name),
                    )
                    .with_suggestion(format!("Rename the prop or let React supply '{}'", name)),
                );
            }
        }

        if props.contains_key("class") {
            diagnostics.push(
                Diagnostic::warning(
                    "react-class-prop",
                    join_path(path, "props.class"),
                    "Use 'className' instead of 'class' in React",
                )
                .with_suggestion("Rename the prop to 'className'"),
            );
        }

        if props.contains_key("for") {
            diagnostics.push(
                Diagnostic::warning(
                    "react-for-prop",
                    join_path(path, "props.for"),
                    "Use 'htmlFor' instead of 'for' in React",
                )
                .with_suggestion("Rename the prop to 'htmlFor'"),
            );
        }

        diagnostics
    }

    /// Advisory only: large trees are candidates for memoization.
    pub fn check_tree_size(node_count: usize) -> Vec<Diagnostic> {
        if node_count > 25 {
            vec![Diagnostic::suggestion(
                "react-memoization",
                "",
                format!(
                    "Component tree has {} nodes; consider React.memo or splitting it up",
                    node_count
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_prop_warns() {
        let node = json!({ "type": "div", "props": { "class": "box" } });
        let diagnostics = ReactRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "react-class-prop");
        assert_eq!(diagnostics[0].field, "props.class");
    }

    #[test]
    fn test_reserved_prop_warns() {
        let node = json!({ "type": "li", "props": { "key": "{item.id}" } });
        let diagnostics = ReactRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "react-reserved-prop");
    }

    #[test]
    fn test_classname_is_clean() {
        let node = json!({ "type": "div", "props": { "className": "box" } });
        assert!(ReactRule::check_node("", node.as_object().unwrap()).is_empty());
    }
}
