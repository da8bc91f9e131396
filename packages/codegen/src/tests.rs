use crate::{build_registry, Generator, GeneratorRegistry};
use blueprint_schema::{ComponentDefinition, ComponentMetadata, Framework, GeneratorConfig};
use serde_json::json;

fn button_metadata() -> ComponentMetadata {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "button",
        "props": { "className": "cta" },
        "children": "Click me",
        "events": { "click": "doSomething()" }
    }))
    .unwrap();
    ComponentMetadata::new("Button", definition)
}

#[test]
fn test_registry_supports_all_frameworks() {
    let registry = build_registry();
    assert_eq!(
        registry.supported_frameworks(),
        vec![
            Framework::React,
            Framework::Vue,
            Framework::Angular,
            Framework::Vanilla
        ]
    );
    for framework in Framework::ALL {
        assert!(registry.is_supported(framework));
    }
}

#[test]
fn test_create_dispatches_to_framework() {
    let registry = build_registry();
    let metadata = button_metadata();
    let config = GeneratorConfig::default();

    let react = registry.create(Framework::React).unwrap();
    assert_eq!(react.framework(), Framework::React);
    let result = react.generate_component(&metadata, &config).unwrap();
    assert!(result.files.contains_key("Button.tsx"));

    let vue = registry.create(Framework::Vue).unwrap();
    let result = vue.generate_component(&metadata, &config).unwrap();
    assert!(result.files.contains_key("Button.vue"));

    let angular = registry.create(Framework::Angular).unwrap();
    let result = angular.generate_component(&metadata, &config).unwrap();
    assert!(result.files.contains_key("button.component.ts"));

    let vanilla = registry.create(Framework::Vanilla).unwrap();
    let result = vanilla.generate_component(&metadata, &config).unwrap();
    assert!(result.files.contains_key("button.js"));
}

#[test]
fn test_factory_instances_are_equivalent() {
    let registry = build_registry();
    let metadata = button_metadata();
    let config = GeneratorConfig::default();

    let first = registry
        .create(Framework::React)
        .unwrap()
        .generate_component(&metadata, &config)
        .unwrap();
    let second = registry
        .create(Framework::React)
        .unwrap()
        .generate_component(&metadata, &config)
        .unwrap();
    assert_eq!(first.files, second.files);
    assert_eq!(first.dependencies, second.dependencies);
}

#[test]
fn test_unsupported_framework() {
    let registry = GeneratorRegistry::new();
    let err = registry.create(Framework::Angular).unwrap_err();
    assert!(err.to_string().contains("angular"));
}

#[test]
fn test_generation_error_propagates() {
    let registry = build_registry();
    let metadata = ComponentMetadata::new("", ComponentDefinition::new("div"));
    let generator = registry.create(Framework::React).unwrap();
    assert!(generator
        .generate_component(&metadata, &GeneratorConfig::default())
        .is_err());
}
