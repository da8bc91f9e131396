use blueprint_common::{
    escape_double_quoted, handler_name, inline_css, js_literal, kebab_case, pascal_case,
    CodeBuffer, GenerateError,
};
use blueprint_schema::{
    binding_expression, text_binding, Children, ComponentDefinition, ComponentMetadata,
    EventHandler, GenerationResult, GeneratorConfig,
};
use serde_json::{json, Value};

use crate::project::component_dependencies;

/// Generate one Angular component: class file, template, stylesheet, spec
/// file, and an NgModule when standalone components are disabled.
pub fn generate_component(
    metadata: &ComponentMetadata,
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if metadata.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "component name is empty".to_string(),
        ));
    }

    let class_name = pascal_case(&metadata.name);
    let file_base = kebab_case(&class_name);
    let handlers = collect_handlers(&metadata.definition)?;

    let mut result = GenerationResult::new();
    result.add_file(
        format!("{}.component.ts", file_base),
        render_class_file(&class_name, &file_base, metadata, &handlers, config),
    );
    result.add_file(
        format!("{}.component.html", file_base),
        render_template(&metadata.definition)?,
    );
    result.add_file(
        format!("{}.component.css", file_base),
        format!("/* Styles for {} */\n.{} {{\n}}\n", class_name, file_base),
    );
    if config.testing {
        result.add_file(
            format!("{}.component.spec.ts", file_base),
            render_spec_file(&class_name, &file_base, config),
        );
    }
    if !config.standalone {
        result.add_file(
            format!("{}.module.ts", file_base),
            render_module_file(&class_name, &file_base),
        );
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("angular"));
    result.set_metadata("component", json!(format!("{}Component", class_name)));
    Ok(result)
}

pub(crate) struct Handler {
    pub name: String,
    pub spec: EventHandler,
}

pub(crate) fn collect_handlers(
    definition: &ComponentDefinition,
) -> Result<Vec<Handler>, GenerateError> {
    let mut handlers: Vec<Handler> = Vec::new();
    collect_handlers_into(definition, &mut handlers)?;
    Ok(handlers)
}

fn collect_handlers_into(
    node: &ComponentDefinition,
    handlers: &mut Vec<Handler>,
) -> Result<(), GenerateError> {
    for (event, spec) in &node.events {
        if event.is_empty() || !event.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            return Err(GenerateError::InvalidDefinition(format!(
                "invalid event name: '{}'",
                event
            )));
        }
        let name = handler_name(event);
        if !handlers.iter().any(|h| h.name == name) {
            handlers.push(Handler {
                name,
                spec: spec.clone(),
            });
        }
    }
    if let Children::Nodes(children) = &node.children {
        for child in children {
            collect_handlers_into(child, handlers)?;
        }
    }
    Ok(())
}

fn render_class_file(
    class_name: &str,
    file_base: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> String {
    let mut buf = CodeBuffer::new();

    let needs_input = !metadata.props_schema.is_empty();
    if needs_input {
        buf.add_line("import { Component, Input } from \"@angular/core\";");
    } else {
        buf.add_line("import { Component } from \"@angular/core\";");
    }
    if config.standalone {
        buf.add_line("import { CommonModule } from \"@angular/common\";");
    }
    buf.blank();

    buf.add_line("@Component({");
    buf.indent();
    buf.add_line(&format!("selector: \"app-{}\",", file_base));
    if config.standalone {
        buf.add_line("standalone: true,");
        buf.add_line("imports: [CommonModule],");
    }
    buf.add_line(&format!("templateUrl: \"./{}.component.html\",", file_base));
    buf.add_line(&format!("styleUrls: [\"./{}.component.css\"],", file_base));
    buf.dedent();
    buf.add_line("})");

    buf.add_line(&format!("export class {}Component {{", class_name));
    buf.indent();

    for (prop, spec) in &metadata.props_schema {
        match &spec.default {
            Some(default) => buf.add_line(&format!(
                "@Input() {}: {} = {};",
                prop,
                spec.prop_type.typescript(),
                js_literal(default)
            )),
            None => buf.add_line(&format!(
                "@Input() {}!: {};",
                prop,
                spec.prop_type.typescript()
            )),
        }
    }
    if needs_input {
        buf.blank();
    }

    for (state_name, spec) in &metadata.state {
        if spec.initial.is_null() {
            buf.add_line(&format!("{}: unknown = null;", state_name));
        } else {
            buf.add_line(&format!("{} = {};", state_name, js_literal(&spec.initial)));
        }
    }
    if !metadata.state.is_empty() {
        buf.blank();
    }

    for handler in handlers {
        let params = handler
            .spec
            .parameters()
            .iter()
            .map(|param| format!("{}: any", param))
            .collect::<Vec<_>>()
            .join(", ");
        buf.add_line(&format!("{}({}): void {{", handler.name, params));
        buf.indent();
        for line in handler.spec.body().lines() {
            buf.add_line(line);
        }
        buf.dedent();
        buf.add_line("}");
        buf.blank();
    }

    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

/// Recursively render a definition node as Angular template markup.
pub(crate) fn render_template(node: &ComponentDefinition) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();
    render_node(&mut buf, node)?;
    Ok(buf.into_output())
}

fn render_node(buf: &mut CodeBuffer, node: &ComponentDefinition) -> Result<(), GenerateError> {
    if node.tag.is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "node has an empty 'type'".to_string(),
        ));
    }

    // Custom components are referenced by their generated selector
    let tag = if node.tag.chars().next().is_some_and(|c| c.is_uppercase()) {
        format!("app-{}", kebab_case(&node.tag))
    } else {
        node.tag.clone()
    };

    let mut attrs = Vec::new();
    for (prop, value) in &node.props {
        if let Some(attr) = render_prop(prop, value) {
            attrs.push(attr);
        }
    }
    for (event, spec) in &node.events {
        let args = if spec.parameters().is_empty() {
            String::new()
        } else {
            "$event".to_string()
        };
        attrs.push(format!("({})=\"{}({})\"", event, handler_name(event), args));
    }
    if !node.styles.is_empty() {
        attrs.push(format!("style=\"{}\"", inline_css(&node.styles)));
    }

    let attr_text = if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    };

    match &node.children {
        Children::None => {
            buf.add_line(&format!("<{}{}></{}>", tag, attr_text, tag));
        }
        Children::Text(text) => {
            buf.add_line(&format!("<{}{}>", tag, attr_text));
            buf.indent();
            match text_binding(text) {
                Some(expression) => buf.add_line(&format!("{{{{ {} }}}}", expression)),
                None => buf.add_line(text),
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", tag));
        }
        Children::Nodes(children) if children.is_empty() => {
            buf.add_line(&format!("<{}{}></{}>", tag, attr_text, tag));
        }
        Children::Nodes(children) => {
            buf.add_line(&format!("<{}{}>", tag, attr_text));
            buf.indent();
            for child in children {
                render_node(buf, child)?;
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", tag));
        }
    }
    Ok(())
}

fn render_prop(name: &str, value: &Value) -> Option<String> {
    // Angular templates use plain HTML attribute names
    let attr = match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    };

    if let Some(expression) = binding_expression(value) {
        return Some(format!("[{}]=\"{}\"", attr, expression));
    }

    match value {
        Value::String(literal) => Some(format!("{}=\"{}\"", attr, escape_double_quoted(literal))),
        Value::Bool(boolean) => Some(format!("[{}]=\"{}\"", attr, boolean)),
        Value::Number(number) => Some(format!("[{}]=\"{}\"", attr, number)),
        Value::Null => None,
        composite => Some(format!("[{}]='{}'", attr, js_literal(composite))),
    }
}

fn render_spec_file(class_name: &str, file_base: &str, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { TestBed } from \"@angular/core/testing\";");
    buf.add_line(&format!(
        "import {{ {}Component }} from \"./{}.component\";",
        class_name, file_base
    ));
    buf.blank();
    buf.add_line(&format!("describe(\"{}Component\", () => {{", class_name));
    buf.indent();
    buf.add_line("it(\"should create\", async () => {");
    buf.indent();
    buf.add_line("await TestBed.configureTestingModule({");
    buf.indent();
    if config.standalone {
        buf.add_line(&format!("imports: [{}Component],", class_name));
    } else {
        buf.add_line(&format!("declarations: [{}Component],", class_name));
    }
    buf.dedent();
    buf.add_line("}).compileComponents();");
    buf.blank();
    buf.add_line(&format!(
        "const fixture = TestBed.createComponent({}Component);",
        class_name
    ));
    buf.add_line("expect(fixture.componentInstance).toBeTruthy();");
    buf.dedent();
    buf.add_line("});");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}

fn render_module_file(class_name: &str, file_base: &str) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { NgModule } from \"@angular/core\";");
    buf.add_line("import { CommonModule } from \"@angular/common\";");
    buf.add_line(&format!(
        "import {{ {}Component }} from \"./{}.component\";",
        class_name, file_base
    ));
    buf.blank();
    buf.add_line("@NgModule({");
    buf.indent();
    buf.add_line(&format!("declarations: [{}Component],", class_name));
    buf.add_line("imports: [CommonModule],");
    buf.add_line(&format!("exports: [{}Component],", class_name));
    buf.dedent();
    buf.add_line("})");
    buf.add_line(&format!("export class {}Module {{}}", class_name));
    buf.into_output()
}
