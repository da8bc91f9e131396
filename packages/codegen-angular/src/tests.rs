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
fn test_standalone_component() {
    let result = generate_component(&button_metadata(), &GeneratorConfig::default())
        .expect("Failed to generate");
    println!("Files: {:?}", result.files.keys().collect::<Vec<_>>());

    let class_file = &result.files["button.component.ts"];
    println!("Generated code:\n{}", class_file);
    assert!(class_file.contains("import { Component } from \"@angular/core\";"));
    assert!(class_file.contains("selector: \"app-button\","));
    assert!(class_file.contains("standalone: true,"));
    assert!(class_file.contains("templateUrl: \"./button.component.html\","));
    assert!(class_file.contains("export class ButtonComponent {"));
    assert!(class_file.contains("handleClick(): void {"));
    assert!(class_file.contains("doSomething()"));

    let template = &result.files["button.component.html"];
    println!("Generated template:\n{}", template);
    assert!(template.contains("<button class=\"cta\" (click)=\"handleClick()\">"));
    assert!(template.contains("Click me"));

    assert!(result.files.contains_key("button.component.css"));
    assert!(result.files.contains_key("button.component.spec.ts"));
    assert!(!result.files.contains_key("button.module.ts"));
}

#[test]
fn test_ngmodule_component() {
    let mut config = GeneratorConfig::default();
    config.standalone = false;

    let result = generate_component(&button_metadata(), &config).unwrap();
    let module = &result.files["button.module.ts"];
    println!("Generated module:\n{}", module);

    assert!(module.contains("@NgModule({"));
    assert!(module.contains("declarations: [ButtonComponent],"));
    assert!(module.contains("exports: [ButtonComponent],"));

    let class_file = &result.files["button.component.ts"];
    assert!(!class_file.contains("standalone: true,"));

    let spec = &result.files["button.component.spec.ts"];
    assert!(spec.contains("declarations: [ButtonComponent],"));
}

#[test]
fn test_inputs_from_props_schema() {
    let mut metadata = button_metadata();
    metadata.props_schema = serde_json::from_value(json!({
        "label": { "type": "string", "required": true },
        "max": { "type": "number", "default": 10 }
    }))
    .unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let class_file = &result.files["button.component.ts"];
    println!("Generated code:\n{}", class_file);

    assert!(class_file.contains("import { Component, Input } from \"@angular/core\";"));
    assert!(class_file.contains("@Input() label!: string;"));
    assert!(class_file.contains("@Input() max: number = 10;"));
}

#[test]
fn test_state_becomes_class_fields() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "div",
        "children": "{count}"
    }))
    .unwrap();
    let mut metadata = ComponentMetadata::new("Counter", definition);
    metadata.state = serde_json::from_value(json!({
        "count": { "initial": 0 },
        "selection": { "initial": null }
    }))
    .unwrap();

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let class_file = &result.files["counter.component.ts"];
    println!("Generated code:\n{}", class_file);
    assert!(class_file.contains("count = 0;"));
    assert!(class_file.contains("selection: unknown = null;"));

    let template = &result.files["counter.component.html"];
    assert!(template.contains("{{ count }}"));
}

#[test]
fn test_property_bindings_and_event_args() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "input",
        "props": { "value": "{value}", "placeholder": "Name", "disabled": false },
        "children": null,
        "events": { "change": { "parameters": ["event"], "handler": "update(event)" } }
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("TextField", definition);

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let template = &result.files["text-field.component.html"];
    println!("Generated template:\n{}", template);

    assert!(template.contains("[value]=\"value\""));
    assert!(template.contains("placeholder=\"Name\""));
    assert!(template.contains("[disabled]=\"false\""));
    assert!(template.contains("(change)=\"handleChange($event)\""));

    let class_file = &result.files["text-field.component.ts"];
    assert!(class_file.contains("handleChange(event: any): void {"));
}

#[test]
fn test_custom_components_use_selectors() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "main",
        "children": [
            { "type": "UserCard", "props": { "name": "{user.name}" }, "children": null }
        ]
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Dashboard", definition);

    let result = generate_component(&metadata, &GeneratorConfig::default()).unwrap();
    let template = &result.files["dashboard.component.html"];
    println!("Generated template:\n{}", template);
    assert!(template.contains("<app-user-card [name]=\"user.name\"></app-user-card>"));
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
fn test_invalid_event_name_fails() {
    let definition: ComponentDefinition = serde_json::from_value(json!({
        "type": "button",
        "children": "Go",
        "events": { "cl ick": "go()" }
    }))
    .unwrap();
    let metadata = ComponentMetadata::new("Button", definition);
    let err = generate_component(&metadata, &GeneratorConfig::default()).unwrap_err();
    assert!(err.to_string().contains("invalid event name"));
}

#[test]
fn test_generate_page_with_routes() {
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
    println!("Files: {:?}", result.files.keys().collect::<Vec<_>>());

    let class_file = &result.files["pages/dashboard-page.component.ts"];
    println!("Generated code:\n{}", class_file);
    assert!(class_file.contains(
        "import { UserCardComponent } from \"../components/user-card.component\";"
    ));
    assert!(class_file.contains("imports: [CommonModule, UserCardComponent],"));

    let routes = &result.files["pages/dashboard.routes.ts"];
    assert!(routes.contains("path: \"dashboard\""));
    assert!(routes.contains("component: DashboardPageComponent"));
    assert!(result.dependencies.contains(&"@angular/router".to_string()));
}

#[test]
fn test_generate_project_scaffolding() {
    let project = ProjectDefinition {
        name: "storefront".to_string(),
        description: "A demo storefront".to_string(),
        framework: Framework::Angular,
        config: GeneratorConfig::default(),
    };
    let mut config = GeneratorConfig::default();
    config.routing = true;

    let result = generate_project(&project, &config).unwrap();
    println!("Files: {:?}", result.files.keys().collect::<Vec<_>>());

    assert!(result.files.contains_key("angular.json"));
    assert!(result.files.contains_key("src/main.ts"));
    assert!(result.files.contains_key("src/app/app.component.ts"));
    assert!(result.files.contains_key("src/app/app.routes.ts"));

    let manifest = &result.files["package.json"];
    assert!(manifest.contains("\"@angular/core\": \"^17.3.0\""));
    assert!(manifest.contains("\"zone.js\""));

    let main = &result.files["src/main.ts"];
    assert!(main.contains("bootstrapApplication(AppComponent, appConfig)"));

    let app_config = &result.files["src/app/app.config.ts"];
    assert!(app_config.contains("providers: [provideRouter(routes)],"));
}
