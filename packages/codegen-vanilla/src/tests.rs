use crate::{generate_component, generate_page, generate_project};
use blueprint_schema::{
    ComponentDefinition, ComponentMetadata, Framework, GeneratorConfig, PageDefinition,
    ProjectDefinition,
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
fn test_component_class_with_event_markers() {
    let result = generate_component(&button_metadata(), &GeneratorConfig::default())
        .expect("Failed to generate");

    let source = &result.files["button.js"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("export class Button {"));
    assert!(source.contains("constructor(props = {}) {"));
    assert!(source.contains("<button class=\"cta\" data-on-click=\"handleClick\">"));
    assert!(source.contains("Click me"));
    assert!(source.contains("handleClick() {"));
    assert!(source.contains("doSomething()"));
    assert!(source.contains("root.querySelectorAll(\"[data-on-click]\").forEach((el) => {"));
    assert!(source.contains(
        "el.addEventListener(\"click\", (event) => this[el.dataset.onClick](event));"
    ));

    assert!(result.files.contains_key("button.css"));
    assert!(result.files.contains_key("button.test.js"));
}

#[test]
fn test_default_props_merge() {
    let mut metadata = button_metadata();
    metadata.props_schema = serde_json::from_value(json!({
        "label": { "type": "string", "required": true },
        "max": { "type": "number", "default": 10 }
    }))
    .unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["button.js"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("static defaultProps = {"));
    assert!(source.contains("max: 10,"));
    assert!(source.contains("this.props = { ...Button.defaultProps, ...props };"));
}

#[test]
fn test_state_object() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "children": "{this.state.count}"
    }))
    .unwrap();
    let mut metadata = ComponentMetadata::new("Counter", definition);
    metadata.state = serde_json::from_value(json!({ "count": { "initial": 0 } })).unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["counter.js"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("this.state = {"));
    assert!(source.contains("count: 0,"));
    assert!(source.contains("${this.state.count}"));
}

#[test]
fn test_bindings_interpolate() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "input",
        "props": { "value": "{this.props.value}", "placeholder": "Name", "disabled": true },
        "children": null
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("TextField", definition);

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["text-field.js"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("value=\"${this.props.value}\""));
    assert!(source.contains("placeholder=\"Name\""));
    assert!(source.contains("<input value=\"${this.props.value}\" placeholder=\"Name\" disabled>"));
}

#[test]
fn test_child_components_render_inline() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "main",
        "children": [
            { "type": "UserCard", "props": { "name": "{user.name}", "role": "admin" }, "children": null }
        ]
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Dashboard", definition);

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let source = &result.files["dashboard.js"];
    println!("Generated code:\n{}", source);

    assert!(source.contains("import { UserCard } from \"./user-card.js\";"));
    assert!(source.contains("${new UserCard({ name: user.name, role: \"admin\" }).html()}"));
}

#[test]
fn test_determinism() {
    let metadata = button_metadata();
    let config = GeneratorConfig::default();
    let first = generate_component(&metadata, &config).unwrap();
    let second = generate_component(&metadata, &config).unwrap();
    assert_eq!(first.files, second.files);
}

#[test]
fn test_empty_name_fails() {
    let metadata = ComponentMetadata::new("", ComponentDefinition::new("div"));
    assert!(generate_component(&metadata, &GeneratorConfig::default()).is_err());
}

#[test]
fn test_generate_page_with_route() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "main",
        "children": [ { "type": "UserCard", "children": null } ]
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

    let source = &result.files["pages/dashboard-page.js"];
    println!("Generated code:\n{}", source);
    assert!(source.contains("import { UserCard } from \"../components/user-card.js\";"));
    assert!(source.contains("export class DashboardPage {"));

    let route = &result.files["pages/dashboard.route.js"];
    assert!(route.contains("path: \"/dashboard\","));
    assert!(route.contains("component: DashboardPage,"));
}

#[test]
fn test_generate_project_with_pwa() {
    let project = ProjectDefinition {
        name: "storefront".to_string(),
        description: "A demo storefront".to_string(),
        framework: Framework::Vanilla,
        config: GeneratorConfig::default(),
    };
    let mut config = GeneratorConfig::default();
    config.pwa = true;

    let result = generate_project(&project, &config).unwrap();
    println!("Files: {:?}", result.files.keys().collect::<Vec<_>>());

    assert!(result.files.contains_key("public/manifest.webmanifest"));
    assert!(result.files.contains_key("src/sw.js"));

    let html = &result.files["index.html"];
    assert!(html.contains("<link rel=\"manifest\" href=\"/manifest.webmanifest\">"));

    let main = &result.files["src/main.js"];
    assert!(main.contains("navigator.serviceWorker.register(\"/src/sw.js\");"));

    let manifest = &result.files["package.json"];
    assert!(manifest.contains("\"vite\""));
    assert!(!manifest.contains("\"dependencies\""));
}
