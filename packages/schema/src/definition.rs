use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A framework-agnostic description of one UI node.
///
/// This is the unit every generator consumes: a tag (or component) name,
/// its props, ordered children, event handlers, and inline styles. Prop
/// values are either JSON literals or binding expressions (a string wrapped
/// in `{...}` whose inner text is emitted in the target framework's
/// expression position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Tag or component name (e.g. "div", "Button")
    #[serde(rename = "type")]
    pub tag: String,

    /// Attribute/prop values keyed by name, in declaration order
    #[serde(default)]
    pub props: IndexMap<String, Value>,

    /// Nested definitions or literal text content
    #[serde(default)]
    pub children: Children,

    /// Event name -> handler spec
    #[serde(default)]
    pub events: IndexMap<String, EventHandler>,

    /// camelCase CSS property -> value
    #[serde(default)]
    pub styles: IndexMap<String, String>,
}

impl ComponentDefinition {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: IndexMap::new(),
            children: Children::None,
            events: IndexMap::new(),
            styles: IndexMap::new(),
        }
    }

    /// Total node count of this tree, counting this node.
    pub fn node_count(&self) -> usize {
        match &self.children {
            Children::Nodes(nodes) => 1 + nodes.iter().map(|n| n.node_count()).sum::<usize>(),
            _ => 1,
        }
    }

    /// Maximum nesting depth of this tree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match &self.children {
            Children::Nodes(nodes) => {
                1 + nodes.iter().map(|n| n.depth()).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

/// Children of a definition node: nothing, literal text, or nested nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Children {
    #[default]
    None,
    Text(String),
    Nodes(Vec<ComponentDefinition>),
}

impl Children {
    pub fn is_empty(&self) -> bool {
        match self {
            Children::None => true,
            Children::Text(text) => text.is_empty(),
            Children::Nodes(nodes) => nodes.is_empty(),
        }
    }
}

/// An event handler: either a literal code string, or a structured spec
/// carrying explicit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventHandler {
    Code(String),
    Spec {
        #[serde(default)]
        parameters: Vec<String>,
        handler: String,
    },
}

impl EventHandler {
    /// The handler body, regardless of form.
    pub fn body(&self) -> &str {
        match self {
            EventHandler::Code(code) => code,
            EventHandler::Spec { handler, .. } => handler,
        }
    }

    /// Declared parameters, empty for the literal form.
    pub fn parameters(&self) -> &[String] {
        match self {
            EventHandler::Code(_) => &[],
            EventHandler::Spec { parameters, .. } => parameters,
        }
    }
}

/// Returns the inner expression when `value` is a binding (a string wrapped
/// in `{...}`), or `None` for plain literals.
pub fn binding_expression(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => text_binding(s),
        _ => None,
    }
}

/// String form of [`binding_expression`], for text children.
pub fn text_binding(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.len() > 2 && trimmed.starts_with('{') && trimmed.ends_with('}') {
        Some(trimmed[1..trimmed.len() - 1].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_definition() {
        let definition: ComponentDefinition =
            serde_json::from_value(json!({ "type": "div" })).unwrap();
        assert_eq!(definition.tag, "div");
        assert!(definition.children.is_empty());
        assert!(definition.props.is_empty());
    }

    #[test]
    fn test_parse_text_children() {
        let definition: ComponentDefinition = serde_json::from_value(json!({
            "type": "button",
            "props": { "className": "cta" },
            "children": "Click me",
            "events": { "click": "doSomething()" }
        }))
        .unwrap();
        assert_eq!(definition.children, Children::Text("Click me".to_string()));
        assert_eq!(definition.events["click"].body(), "doSomething()");
    }

    #[test]
    fn test_parse_structured_handler() {
        let definition: ComponentDefinition = serde_json::from_value(json!({
            "type": "input",
            "events": { "change": { "parameters": ["event"], "handler": "setValue(event.target.value)" } }
        }))
        .unwrap();
        let handler = &definition.events["change"];
        assert_eq!(handler.parameters(), &["event".to_string()]);
        assert_eq!(handler.body(), "setValue(event.target.value)");
    }

    #[test]
    fn test_node_count_and_depth() {
        let definition: ComponentDefinition = serde_json::from_value(json!({
            "type": "div",
            "children": [
                { "type": "span", "children": "a" },
                { "type": "ul", "children": [ { "type": "li", "children": "b" } ] }
            ]
        }))
        .unwrap();
        assert_eq!(definition.node_count(), 4);
        assert_eq!(definition.depth(), 3);
    }

    #[test]
    fn test_binding_expression() {
        assert_eq!(binding_expression(&json!("{count}")), Some("count"));
        assert_eq!(binding_expression(&json!("{ user.name }")), Some("user.name"));
        assert_eq!(binding_expression(&json!("plain")), None);
        assert_eq!(binding_expression(&json!(42)), None);
        assert_eq!(binding_expression(&json!("{}")), None);
    }
}
