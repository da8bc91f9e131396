use super::{join_path, node_props, node_tag};
use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};

/// Element-type checks shared by every framework: interactive elements
/// should be wired and labelled; media elements need sources.
pub struct ElementRule;

const INTERACTIVE_ELEMENTS: [&str; 5] = ["button", "input", "form", "select", "textarea"];
const MEDIA_ELEMENTS: [&str; 3] = ["img", "video", "audio"];
const LABEL_ATTRIBUTES: [&str; 3] = ["aria-label", "aria-labelledby", "title"];

impl ElementRule {
    pub fn check_node(path: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(tag) = node_tag(node) else {
            return diagnostics;
        };
        let tag = tag.to_lowercase();

        if INTERACTIVE_ELEMENTS.contains(&tag.as_str()) {
            diagnostics.extend(Self::check_interactive(path, &tag, node));
        }

        if MEDIA_ELEMENTS.contains(&tag.as_str()) {
            diagnostics.extend(Self::check_media(path, &tag, node));
        }

        diagnostics
    }

    fn check_interactive(path: &str, tag: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let has_events = node
            .get("events")
            .and_then(|v| v.as_object())
            .is_some_and(|events| !events.is_empty());

        if !has_events {
            diagnostics.push(
                Diagnostic::warning(
                    "interactive-no-handlers",
                    join_path(path, "events"),
                    format!("Interactive <{}> has no event handlers", tag),
                )
                .with_suggestion("Wire an event handler or use a non-interactive element"),
            );
        }

        let has_label = node_props(node).is_some_and(|props| {
            LABEL_ATTRIBUTES.iter().any(|attr| props.contains_key(*attr))
        });
        let has_text = matches!(node.get("children"), Some(Value::String(text)) if !text.is_empty());

        if !has_label && !has_text {
            diagnostics.push(
                Diagnostic::warning(
                    "interactive-no-label",
                    join_path(path, "props"),
                    format!("Interactive <{}> has no accessible label or text content", tag),
                )
                .with_suggestion("Add text content, 'aria-label', or 'title'"),
            );
        }

        diagnostics
    }

    fn check_media(path: &str, tag: &str, node: &Map<String, Value>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let props = node_props(node);

        let has_src = props.is_some_and(|p| p.contains_key("src"));
        if !has_src {
            diagnostics.push(
                Diagnostic::error(
                    "media-missing-src",
                    join_path(path, "props.src"),
                    format!("<{}> requires a 'src' attribute", tag),
                )
                .with_suggestion("Add a 'src' prop pointing at the media source"),
            );
        }

        if tag == "img" {
            let has_alt = props.is_some_and(|p| p.contains_key("alt"));
            if !has_alt {
                diagnostics.push(
                    Diagnostic::warning(
                        "media-missing-alt",
                        join_path(path, "props.alt"),
                        "Images should carry an 'alt' description for screen readers",
                    )
                    .with_suggestion("Add an 'alt' prop describing the image"),
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
    fn test_img_without_src_is_error() {
        let node = json!({ "type": "img", "props": { "alt": "Logo" } });
        let diagnostics = ElementRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "media-missing-src");
    }

    #[test]
    fn test_img_without_alt_is_warning() {
        let node = json!({ "type": "img", "props": { "src": "logo.png" } });
        let diagnostics = ElementRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "media-missing-alt");
    }

    #[test]
    fn test_button_without_handlers_warns() {
        let node = json!({ "type": "button", "children": "Save" });
        let diagnostics = ElementRule::check_node("", node.as_object().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "interactive-no-handlers");
    }

    #[test]
    fn test_wired_labelled_button_is_clean() {
        let node = json!({
            "type": "button",
            "props": { "aria-label": "Save" },
            "children": "Save",
            "events": { "click": "save()" }
        });
        assert!(ElementRule::check_node("", node.as_object().unwrap()).is_empty());
    }
}
