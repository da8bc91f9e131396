use crate::{generate_component, generate_page, generate_project};
use blueprint_schema::{
    ComponentDefinition, ComponentKind, ComponentMetadata, Framework, GeneratorConfig,
    PageDefinition, ProjectDefinition, StateLibrary,
};
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
fn test_simple_component() {
    let result = generate_component(&button_metadata(), &GeneratorConfig::default())
        .expect("Failed to generate");

    let source = &result.files["Button.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("import React from \"react\""));
    assert!(source.contains("export const Button: React.FC = () => {"));
    assert!(source.contains("<button className=\"cta\" onClick={handleClick}>"));
    assert!(source.contains("Click me"));
    assert!(source.contains("</button>"));
    assert!(source.contains("const handleClick = () => {"));
    assert!(source.contains("doSomething()"));
    assert!(source.contains("export default Button;"));
}

#[test]
fn test_component_file_set() {
    let mut config = GeneratorConfig::default();
    config.testing = true;
    let result = generate_component(&button_metadata(), &config).unwrap();

    assert!(result.files.contains_key("Button.tsx"));
    assert!(result.files.contains_key("Button.css"));
    assert!(result.files.contains_key("Button.test.tsx"));
    assert!(result.files.contains_key("index.ts"));
    assert!(result.dependencies.contains(&"react".to_string()));
    assert!(result.dependencies.contains(&"react-dom".to_string()));
}

#[test]
fn test_javascript_extension_without_typescript() {
    let mut config = GeneratorConfig::default();
    config.typescript = false;
    let result = generate_component(&button_metadata(), &config).unwrap();
    assert!(result.files.contains_key("Button.jsx"));
    assert!(!result.files.contains_key("Button.tsx"));
}

#[test]
fn test_props_interface_and_defaults() {
    let mut metadata = button_metadata();
    metadata.props_schema = serde_json::from_value(json!({
        "label": { "type": "string", "required": true },
        "max": { "type": "number", "default": 10 }
    }))
    .unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Button.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("export interface ButtonProps {"));
    assert!(source.contains("label: string;"));
    assert!(source.contains("max?: number;"));
    assert!(source.contains("React.FC<ButtonProps>"));
    assert!(source.contains("{ label, max = 10 }"));
}

#[test]
fn test_state_uses_hooks() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "children": "{count}"
    }))
    .unwrap();
    let mut metadata = ComponentMetadata::new("Counter", definition);
    metadata.state = serde_json::from_value(json!({ "count": { "initial": 0 } })).unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Counter.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("import React, { useState } from \"react\""));
    assert!(source.contains("const [count, setCount] = useState(0);"));
    assert!(source.contains("{count}"));
}

#[test]
fn test_class_component() {
    let mut metadata = button_metadata();
    metadata.kind = ComponentKind::Class;
    metadata.state = serde_json::from_value(json!({ "open": { "initial": false } })).unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Button.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("export class Button extends React.Component"));
    assert!(source.contains("state = { open: false };"));
    assert!(source.contains("onClick={this.handleClick}"));
    assert!(source.contains("render() {"));
}

#[test]
fn test_nested_tree_preserves_structure() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "children": [
            { "type": "span", "children": "Header" },
            { "type": "ul", "children": [ { "type": "li", "children": "Item" } ] }
        ]
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Card", definition.clone());
    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Card.tsx"];
    println!("Generated code:\n{}", source);

    // One opening tag per definition node
    let opening_tags = ["<div", "<span", "<ul", "<li"]
        .iter()
        .map(|tag| source.matches(tag).count())
        .sum::<usize>();
    assert_eq!(opening_tags, definition.node_count());

    // Nesting depth shows up as indentation: the <li> sits two levels
    // beneath the <div>.
    let div_indent = source
        .lines()
        .find(|line| line.trim_start().starts_with("<div"))
        .map(|line| line.len() - line.trim_start().len())
        .unwrap();
    let li_indent = source
        .lines()
        .find(|line| line.trim_start().starts_with("<li"))
        .map(|line| line.len() - line.trim_start().len())
        .unwrap();
    assert_eq!(li_indent - div_indent, 4);
}

#[test]
fn test_binding_props_and_structured_handlers() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "input",
        "props": { "value": "{value}", "disabled": false },
        "children": null,
        "events": {
            "change": { "parameters": ["event"], "handler": "setValue(event.target.value)" }
        }
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("TextField", definition);
    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["TextField.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("value={value}"));
    assert!(source.contains("disabled={false}"));
    assert!(source.contains("onChange={handleChange}"));
    assert!(source.contains("const handleChange = (event: any) => {"));
    assert!(source.contains("setValue(event.target.value)"));
}

#[test]
fn test_class_prop_is_rewritten_to_classname() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "props": { "class": "box" },
        "children": null
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Box", definition);
    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Box.tsx"];
    assert!(source.contains("className=\"box\""));
    assert!(!source.contains("class=\"box\""));
}

#[test]
fn test_inline_styles() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "children": null,
        "styles": { "backgroundColor": "red", "paddingTop": "4px" }
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Banner", definition);
    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["Banner.tsx"];
    assert!(source.contains("style={{ backgroundColor: \"red\", paddingTop: \"4px\" }}"));
}

#[test]
fn test_determinism() {
    let metadata = button_metadata();
    let config = GeneratorConfig::default();
    let first = generate_component(&metadata, &config).unwrap();
    let second = generate_component(&metadata, &config).unwrap();
    assert_eq!(first.files, second.files);
    assert_eq!(first.dependencies, second.dependencies);
}

#[test]
fn test_empty_name_fails_with_no_files() {
    let metadata = ComponentMetadata::new("", ComponentDefinition::new("div"));
    let error = generate_component(&metadata, &GeneratorConfig::default());
    assert!(error.is_err());
}

#[test]
fn test_invalid_event_name_fails() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "button",
        "children": "x",
        "events": { "cli ck!": "go()" }
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Bad", definition);
    assert!(generate_component(&metadata, &GeneratorConfig::default()).is_err());
}

#[test]
fn test_generate_page_with_routing() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "main",
        "children": [ { "type": "UserCard", "props": { "name": "{user.name}" }, "children": null } ]
    }))
    .unwrap();
    let page = PageDefinition {
        name: "Dashboard".to_string(),
        route: "/dashboard".to_string(),
        definition,
    };
    let card = ComponentMetadata::new("UserCard", ComponentDefinition::new("div"));

    let mut config = GeneratorConfig::default();
    config.routing = true;
    let result = generate_page(&page, &[card], &config).unwrap();
    let source = &result.files["pages/DashboardPage.tsx"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("import { UserCard } from \"../components/UserCard\";"));
    assert!(source.contains("<UserCard name={user.name} />"));
    assert!(source.contains("path: \"/dashboard\","));
    assert!(source.contains("element: <DashboardPage />,"));
    assert!(result.dependencies.contains(&"react-router-dom".to_string()));
}

#[test]
fn test_generate_project_scaffolding() {
    let project = ProjectDefinition {
        name: "storefront".to_string(),
        description: "A demo storefront".to_string(),
        framework: Framework::React,
        config: GeneratorConfig::default(),
    };
    let mut config = GeneratorConfig::default();
    config.state_management = Some(StateLibrary::Redux);

    let result = generate_project(&project, &config).unwrap();
    println!("Files: {:?}", result.files.keys().collect::<Vec<_>>());

    assert!(result.files.contains_key("package.json"));
    assert!(result.files.contains_key("index.html"));
    assert!(result.files.contains_key("src/main.tsx"));
    assert!(result.files.contains_key("src/App.tsx"));
    assert!(result.files.contains_key("vite.config.ts"));
    assert!(result.files.contains_key("tsconfig.json"));
    assert!(result.files.contains_key("src/store.ts"));
    assert!(result.files.contains_key("README.md"));
    assert!(result.files.contains_key(".gitignore"));

    let manifest = &result.files["package.json"];
    assert!(manifest.contains("\"react\": \"^18.2.0\""));
    assert!(manifest.contains("\"@reduxjs/toolkit\""));
    assert!(manifest.contains("\"dev\": \"vite\""));

    let store = &result.files["src/store.ts"];
    assert!(store.contains("configureStore"));
}

#[test]
fn test_project_with_empty_name_fails() {
    let project = ProjectDefinition {
        name: "  ".to_string(),
        description: String::new(),
        framework: Framework::React,
        config: GeneratorConfig::default(),
    };
    assert!(generate_project(&project, &GeneratorConfig::default()).is_err());
}
