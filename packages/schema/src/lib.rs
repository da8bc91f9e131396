mod config;
mod definition;
mod metadata;
mod result;

pub use config::{
    BuildTool, Framework, GeneratorConfig, ProjectDefinition, StateLibrary, StylingApproach,
};
pub use definition::{binding_expression, text_binding, Children, ComponentDefinition, EventHandler};
pub use metadata::{
    ComponentKind, ComponentMetadata, PageDefinition, PropSpec, PropType, StateSpec,
};
pub use result::GenerationResult;
