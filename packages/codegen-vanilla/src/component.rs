use blueprint_common::{
    camel_case, escape_double_quoted, handler_name, inline_css, js_literal, kebab_case,
    pascal_case, CodeBuffer, GenerateError,
};
use blueprint_schema::{
    binding_expression, text_binding, Children, ComponentDefinition, ComponentMetadata,
    EventHandler, GenerationResult, GeneratorConfig,
};
use serde_json::{json, Value};

use crate::project::component_dependencies;

/// Generate a dependency-free component class. Event wiring goes through
/// data-on-* markers that bindEvents resolves against the instance.
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
        format!("{}.js", file_base),
        render_class(&class_name, metadata, &handlers)?,
    );
    result.add_file(
        format!("{}.css", file_base),
        format!("/* Styles for {} */\n.{} {{\n}}\n", class_name, file_base),
    );
    if config.testing {
        result.add_file(
            format!("{}.test.js", file_base),
            render_test_file(&class_name, &file_base),
        );
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vanilla"));
    result.set_metadata("component", json!(class_name));
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

/// Distinct event names used anywhere in the tree, in first-seen order.
pub(crate) fn collect_events(node: &ComponentDefinition, events: &mut Vec<String>) {
    for event in node.events.keys() {
        if !events.contains(event) {
            events.push(event.clone());
        }
    }
    if let Children::Nodes(children) = &node.children {
        for child in children {
            collect_events(child, events);
        }
    }
}

fn collect_custom_tags(node: &ComponentDefinition, tags: &mut Vec<String>) {
    if node.tag.chars().next().is_some_and(|c| c.is_uppercase()) && !tags.contains(&node.tag) {
        tags.push(node.tag.clone());
    }
    if let Children::Nodes(children) = &node.children {
        for child in children {
            collect_custom_tags(child, tags);
        }
    }
}

fn render_class(
    class_name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();

    let mut custom_tags = Vec::new();
    collect_custom_tags(&metadata.definition, &mut custom_tags);
    for tag in &custom_tags {
        let name = pascal_case(tag);
        if name != class_name {
            buf.add_line(&format!(
                "import {{ {} }} from \"./{}.js\";",
                name,
                kebab_case(&name)
            ));
        }
    }
    if !custom_tags.is_empty() {
        buf.blank();
    }

    buf.add_line(&format!("export class {} {{", class_name));
    buf.indent();

    let defaults: Vec<(&String, &Value)> = metadata
        .props_schema
        .iter()
        .filter_map(|(prop, spec)| spec.default.as_ref().map(|value| (prop, value)))
        .collect();
    if !defaults.is_empty() {
        buf.add_line("static defaultProps = {");
        buf.indent();
        for (prop, value) in &defaults {
            buf.add_line(&format!("{}: {},", prop, js_literal(value)));
        }
        buf.dedent();
        buf.add_line("};");
        buf.blank();
    }

    buf.add_line("constructor(props = {}) {");
    buf.indent();
    if defaults.is_empty() {
        buf.add_line("this.props = props;");
    } else {
        buf.add_line(&format!(
            "this.props = {{ ...{}.defaultProps, ...props }};",
            class_name
        ));
    }
    if metadata.state.is_empty() {
        buf.add_line("this.state = {};");
    } else {
        buf.add_line("this.state = {");
        buf.indent();
        for (state_name, spec) in &metadata.state {
            buf.add_line(&format!("{}: {},", state_name, js_literal(&spec.initial)));
        }
        buf.dedent();
        buf.add_line("};");
    }
    buf.dedent();
    buf.add_line("}");
    buf.blank();

    for handler in handlers {
        let params = handler.spec.parameters().join(", ");
        buf.add_line(&format!("{}({}) {{", handler.name, params));
        buf.indent();
        for line in handler.spec.body().lines() {
            buf.add_line(line);
        }
        buf.dedent();
        buf.add_line("}");
        buf.blank();
    }

    buf.add_line("html() {");
    buf.indent();
    buf.add_line("return `");
    let mut markup = CodeBuffer::new();
    render_node(&mut markup, &metadata.definition)?;
    for line in markup.into_output().lines() {
        buf.add_line(line);
    }
    buf.add_line("`;");
    buf.dedent();
    buf.add_line("}");
    buf.blank();

    buf.add_line("mount(container) {");
    buf.indent();
    buf.add_line("container.innerHTML = this.html();");
    buf.add_line("this.bindEvents(container);");
    buf.dedent();
    buf.add_line("}");
    buf.blank();

    let mut events = Vec::new();
    collect_events(&metadata.definition, &mut events);
    buf.add_line("bindEvents(root) {");
    buf.indent();
    for event in &events {
        let dataset_key = camel_case(&format!("on-{}", event));
        buf.add_line(&format!(
            "root.querySelectorAll(\"[data-on-{}]\").forEach((el) => {{",
            event
        ));
        buf.indent();
        buf.add_line(&format!(
            "el.addEventListener(\"{}\", (event) => this[el.dataset.{}](event));",
            event, dataset_key
        ));
        buf.dedent();
        buf.add_line("});");
    }
    buf.dedent();
    buf.add_line("}");

    buf.dedent();
    buf.add_line("}");
    Ok(buf.into_output())
}

pub(crate) fn render_node(
    buf: &mut CodeBuffer,
    node: &ComponentDefinition,
) -> Result<(), GenerateError> {
    if node.tag.is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "node has an empty 'type'".to_string(),
        ));
    }

    // Child component instances are rendered inline via their html() output
    if node.tag.chars().next().is_some_and(|c| c.is_uppercase()) {
        let name = pascal_case(&node.tag);
        let args = node
            .props
            .iter()
            .map(|(prop, value)| match binding_expression(value) {
                Some(expression) => format!("{}: {}", prop, expression),
                None => format!("{}: {}", prop, js_literal(value)),
            })
            .collect::<Vec<_>>()
            .join(", ");
        if args.is_empty() {
            buf.add_line(&format!("${{new {}().html()}}", name));
        } else {
            buf.add_line(&format!("${{new {}({{ {} }}).html()}}", name, args));
        }
        return Ok(());
    }

    let mut attrs = Vec::new();
    for (prop, value) in &node.props {
        if let Some(attr) = render_prop(prop, value) {
            attrs.push(attr);
        }
    }
    for event in node.events.keys() {
        attrs.push(format!("data-on-{}=\"{}\"", event, handler_name(event)));
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
            buf.add_line(&format!("<{}{}></{}>", node.tag, attr_text, node.tag));
        }
        Children::Text(text) => {
            buf.add_line(&format!("<{}{}>", node.tag, attr_text));
            buf.indent();
            match text_binding(text) {
                Some(expression) => buf.add_line(&format!("${{{}}}", expression)),
                None => buf.add_line(text),
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", node.tag));
        }
        Children::Nodes(children) if children.is_empty() => {
            buf.add_line(&format!("<{}{}></{}>", node.tag, attr_text, node.tag));
        }
        Children::Nodes(children) => {
            buf.add_line(&format!("<{}{}>", node.tag, attr_text));
            buf.indent();
            for child in children {
                render_node(buf, child)?;
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", node.tag));
        }
    }
    Ok(())
}

fn render_prop(name: &str, value: &Value) -> Option<String> {
    let attr = match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    };

    if let Some(expression) = binding_expression(value) {
        return Some(format!("{}=\"${{{}}}\"", attr, expression));
    }

    match value {
        Value::String(literal) => Some(format!("{}=\"{}\"", attr, escape_double_quoted(literal))),
        Value::Bool(true) => Some(attr.to_string()),
        Value::Bool(false) => None,
        Value::Number(number) => Some(format!("{}=\"{}\"", attr, number)),
        Value::Null => None,
        composite => Some(format!("{}='{}'", attr, js_literal(composite))),
    }
}

fn render_test_file(class_name: &str, file_base: &str) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { describe, it, expect } from \"vitest\";");
    buf.add_line(&format!(
        "import {{ {} }} from \"./{}.js\";",
        class_name, file_base
    ));
    buf.blank();
    buf.add_line(&format!("describe(\"{}\", () => {{", class_name));
    buf.indent();
    buf.add_line("it(\"renders markup\", () => {");
    buf.indent();
    buf.add_line(&format!("const component = new {}();", class_name));
    buf.add_line("expect(component.html()).toContain(\"<\");");
    buf.dedent();
    buf.add_line("});");
    buf.blank();
    buf.add_line("it(\"mounts into a container\", () => {");
    buf.indent();
    buf.add_line("const container = document.createElement(\"div\");");
    buf.add_line(&format!("new {}().mount(container);", class_name));
    buf.add_line("expect(container.innerHTML.length).toBeGreaterThan(0);");
    buf.dedent();
    buf.add_line("});");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}
