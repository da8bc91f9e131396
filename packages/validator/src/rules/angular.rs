use super::{join_path, node_props};
use crate::diagnostic::Diagnostic;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Angular template conventions: structural directives and binding syntax.
pub struct AngularRule;

const STRUCTURAL_DIRECTIVES: [&str; 5] = [
    "*ngIf",
    "*ngFor",
    "*ngSwitch",
    "*ngSwitchCase",
    "*ngSwitchDefault",
];

fn event_binding_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\([a-zA-Z][a-zA-Z0-9.]*\)$").unwrap())
}

fn property_binding_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[[a-zA-Z][a-zA-Z0-9.\-]*\]$").unwrap())
}

impl AngularRule {
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(props) = node_props(node) else {
            return diagnostics;
        };

        for name in props.keys() {
            let field = join_path(path, &format!("props.{}", name));

            if name.starts_with('*') {
                if !STRUCTURAL_DIRECTIVES.contains(&name.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "angular-structural-directive",
                            field,
                            format!("Unrecognized structural directive '{}'", name),
                        )
                        .with_suggestion("Did you mean *ngIf, *ngFor, or *ngSwitch?"),
                    );
                }
            } else if name.starts_with('(') {
                if !event_binding_re().is_match(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "angular-event-binding",
                            field,
                            format!("Malformed event binding '{}'", name),
                        )
                        .with_suggestion("Event bindings look like (click) or (keydown.enter)"),
                    );
                }
            } else if name.starts_with('[') {
                if !property_binding_re().is_match(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "angular-property-binding",
                            field,
                            format!("Malformed property binding '{}'", name),
                        )
                        .with_suggestion("Property bindings look like [value] or [attr.aria-label]"),
                    );
                }
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
    fn test_well_formed_bindings_pass() {
        let node = json!({
            "type": "button",
            "props": { "(click)": "save()", "[disabled]": "busy", "*ngIf": "visible" }
        });
        assert!(AngularRule::check_node("", node.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_unterminated_event_binding_warns() {
        let node = json!({ "type": "button", "props": { "(click": "save()" } });
        let diagnostics = AngularRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "angular-event-binding");
    }

    #[test]
    fn test_unknown_structural_directive_warns() {
        let node = json!({ "type": "div", "props": { "*ngWhenever": "x" } });
        let diagnostics = AngularRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "angular-structural-directive");
    }
}
