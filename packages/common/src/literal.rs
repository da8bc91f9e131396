use blueprint_schema::PropType;
use indexmap::IndexMap;
use serde_json::Value;

use crate::naming::css_property;

/// Render a JSON value as a JavaScript literal. JSON is a subset of JS, so
/// the serialized form is emitted as-is.
pub fn js_literal(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Render camelCase style properties as an inline CSS declaration list:
/// `{backgroundColor: "red"}` -> `background-color: red`.
pub fn inline_css(styles: &IndexMap<String, String>) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {}", css_property(property), value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A placeholder literal of the given type, used when generated tests need
/// a value for a required prop.
pub fn sample_literal(prop_type: PropType) -> &'static str {
    match prop_type {
        PropType::String => "\"example\"",
        PropType::Number => "0",
        PropType::Boolean => "false",
        PropType::Object => "{}",
        PropType::Array => "[]",
        PropType::Function => "() => {}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_literal() {
        assert_eq!(js_literal(&json!("hi")), "\"hi\"");
        assert_eq!(js_literal(&json!(3.5)), "3.5");
        assert_eq!(js_literal(&json!({ "a": [1, true] })), "{\"a\":[1,true]}");
    }

    #[test]
    fn test_inline_css() {
        let mut styles = IndexMap::new();
        styles.insert("backgroundColor".to_string(), "red".to_string());
        styles.insert("paddingTop".to_string(), "4px".to_string());
        assert_eq!(inline_css(&styles), "background-color: red; padding-top: 4px");
    }
}
