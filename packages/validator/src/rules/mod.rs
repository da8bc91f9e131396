mod angular;
mod elements;
mod react;
mod structure;
mod vanilla;
mod vue;

pub use angular::AngularRule;
pub use elements::ElementRule;
pub use react::ReactRule;
pub use structure::StructureRule;
pub use vanilla::VanillaRule;
pub use vue::VueRule;

use serde_json::{Map, Value};

/// Props object of a definition node, when present and well-formed.
pub(crate) fn node_props(node: &Map<String, Value>) -> Option<&Map<String, Value>> {
    node.get("props").and_then(|v| v.as_object())
}

/// Tag name of a definition node, when present.
pub(crate) fn node_tag(node: &Map<String, Value>) -> Option<&str> {
    node.get("type").and_then(|v| v.as_str())
}

/// Join a parent path and a field name into a diagnostic path.
pub(crate) fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

/// True when the tag names a custom component rather than a plain element.
pub(crate) fn is_custom_component(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_uppercase())
}
