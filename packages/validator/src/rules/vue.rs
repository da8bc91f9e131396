use super::{join_path, node_props};
use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};

/// Vue template conventions: recognized `v-*` directive names.
pub struct VueRule;

const KNOWN_DIRECTIVES: [&str; 14] = [
    "v-if", "v-else", "v-else-if", "v-for", "v-show", "v-model", "v-bind", "v-on", "v-slot",
    "v-html", "v-text", "v-once", "v-pre", "v-cloak",
];

impl VueRule {
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(props) = node_props(node) else {
            return diagnostics;
        };

        for name in props.keys() {
            if !name.starts_with("v-") {
                continue;
            }

            // Directives may carry arguments and modifiers:
            // v-bind:href, v-on:click.prevent, v-slot:header
            let base = name
                .split(|c| c == ':' || c == '.')
                .next()
                .unwrap_or(name.as_str());

            if !KNOWN_DIRECTIVES.contains(&base) {
                diagnostics.push(
                    Diagnostic::warning(
                        "vue-unknown-directive",
                        join_path(path, &format!("props.{}", name)),
                        format!("Unrecognized Vue directive '{}'", base),
                    )
                    .with_suggestion("Check the directive name against the built-in v-* directives"),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_directive_passes() {
        let node = json!({ "type": "div", "props": { "v-if": "visible", "v-on:click.prevent": "go" } });
        assert!(VueRule::check_node("", node.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_unknown_directive_warns() {
        let node = json!({ "type": "div", "props": { "v-whenever": "visible" } });
        let diagnostics = VueRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "vue-unknown-directive");
    }
}
