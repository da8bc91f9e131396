use super::{is_custom_component, join_path, node_props, node_tag};
use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};

/// Plain-HTML conventions: attributes must be standard for the element.
pub struct VanillaRule;

const GLOBAL_ATTRIBUTES: [&str; 16] = [
    "id",
    "class",
    "style",
    "title",
    "hidden",
    "tabindex",
    "lang",
    "dir",
    "draggable",
    "contenteditable",
    "spellcheck",
    "accesskey",
    "role",
    "slot",
    "translate",
    "autofocus",
];

impl VanillaRule {
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(tag) = node_tag(node) else {
            return diagnostics;
        };

        // Custom components carry arbitrary props.
        if is_custom_component(tag) {
            return diagnostics;
        }

        let Some(props) = node_props(node) else {
            return diagnostics;
        };

        for name in props.keys() {
            if is_standard_attribute(tag, name) {
                continue;
            }
            diagnostics.push(
                Diagnostic::warning(
                    "vanilla-nonstandard-attribute",
                    join_path(path, &format!("props.{}", name)),
                    format!("'{}' is not a standard attribute for <{}>", name, tag),
                )
                .with_suggestion("Use a data-* attribute for custom data"),
            );
        }

        diagnostics
    }
}

fn is_standard_attribute(tag: &str, name: &str) -> bool {
    if name.starts_with("data-") || name.starts_with("aria-") {
        return true;
    }
    if GLOBAL_ATTRIBUTES.contains(&name) {
        return true;
    }
    element_attributes(tag)
        .map(|attrs| attrs.contains(&name))
        // Unknown elements get no per-element check.
        .unwrap_or(true)
}

fn element_attributes(tag: &str) -> Option<&'static [&'static str]> {
    let attrs: &'static [&'static str] = match tag {
        "a" => &["href", "target", "rel", "download", "hreflang", "type"],
        "img" => &["src", "alt", "width", "height", "loading", "srcset", "sizes", "decoding"],
        "input" => &[
            "type", "value", "name", "placeholder", "required", "disabled", "checked", "min",
            "max", "step", "pattern", "readonly", "autocomplete", "list", "maxlength",
            "minlength", "multiple", "accept",
        ],
        "button" => &["type", "disabled", "name", "value", "form"],
        "form" => &["action", "method", "enctype", "novalidate", "target", "autocomplete", "name"],
        "select" => &["name", "multiple", "required", "disabled", "size", "form"],
        "textarea" => &[
            "name", "rows", "cols", "placeholder", "required", "disabled", "readonly",
            "maxlength", "minlength", "wrap",
        ],
        "option" => &["value", "selected", "disabled", "label"],
        "label" => &["for", "form"],
        "video" => &[
            "src", "controls", "autoplay", "loop", "muted", "preload", "poster", "width",
            "height", "playsinline",
        ],
        "audio" => &["src", "controls", "autoplay", "loop", "muted", "preload"],
        "iframe" => &["src", "width", "height", "allow", "allowfullscreen", "loading", "name", "sandbox"],
        "script" => &["src", "type", "async", "defer", "crossorigin"],
        "link" => &["href", "rel", "type", "media", "crossorigin"],
        "meta" => &["name", "content", "charset", "http-equiv"],
        "td" | "th" => &["colspan", "rowspan", "headers", "scope"],
        "ol" => &["start", "reversed", "type"],
        "time" => &["datetime"],
        "details" => &["open"],
        "dialog" => &["open"],
        "progress" => &["value", "max"],
        "meter" => &["value", "min", "max", "low", "high", "optimum"],
        "canvas" => &["width", "height"],
        "source" => &["src", "srcset", "type", "media", "sizes"],
        "track" => &["src", "kind", "srclang", "label", "default"],
        _ => return None,
    };
    Some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standard_attributes_pass() {
        let node = json!({
            "type": "input",
            "props": { "type": "text", "placeholder": "Name", "data-testid": "name" }
        });
        assert!(VanillaRule::check_node("", node.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_nonstandard_attribute_warns() {
        let node = json!({ "type": "img", "props": { "src": "x.png", "fancyMode": true } });
        let diagnostics = VanillaRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "vanilla-nonstandard-attribute");
        assert!(diagnostics[0].field.contains("fancyMode"));
    }

    #[test]
    fn test_custom_component_skipped() {
        let node = json!({ "type": "UserCard", "props": { "anything": 1 } });
        assert!(VanillaRule::check_node("", node.as_object().unwrap()).is_empty());
    }
}
