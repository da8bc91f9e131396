use crate::definition::ComponentDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Abstract prop types shared by every target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Function,
}

impl PropType {
    /// Closest TypeScript type.
    pub fn typescript(&self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Object => "Record<string, unknown>",
            PropType::Array => "unknown[]",
            PropType::Function => "(...args: unknown[]) => void",
        }
    }

    /// Vue runtime prop constructor.
    pub fn vue_constructor(&self) -> &'static str {
        match self {
            PropType::String => "String",
            PropType::Number => "Number",
            PropType::Boolean => "Boolean",
            PropType::Object => "Object",
            PropType::Array => "Array",
            PropType::Function => "Function",
        }
    }
}

/// Typed declaration of one prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    #[serde(rename = "type")]
    pub prop_type: PropType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub default: Option<Value>,
}

/// Declaration of one piece of local component state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    #[serde(default)]
    pub initial: Value,
}

/// Whether the emitted component is a function or a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Functional,
    Class,
}

/// A [`ComponentDefinition`] wrapped with everything a generation call
/// needs: the component name, typed prop declarations, local state, and
/// per-target overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub name: String,

    pub definition: ComponentDefinition,

    #[serde(default)]
    pub props_schema: IndexMap<String, PropSpec>,

    #[serde(default)]
    pub state: IndexMap<String, StateSpec>,

    #[serde(default)]
    pub kind: ComponentKind,

    #[serde(default)]
    pub framework_config: IndexMap<String, Value>,
}

impl ComponentMetadata {
    pub fn new(name: impl Into<String>, definition: ComponentDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
            props_schema: IndexMap::new(),
            state: IndexMap::new(),
            kind: ComponentKind::Functional,
            framework_config: IndexMap::new(),
        }
    }
}

/// A page-level container that composes named components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDefinition {
    pub name: String,

    /// Router path, e.g. "/dashboard"
    #[serde(default = "default_route")]
    pub route: String,

    pub definition: ComponentDefinition,
}

fn default_route() -> String {
    "/".to_string()
}
