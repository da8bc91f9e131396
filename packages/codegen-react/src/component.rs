use blueprint_common::{
    camel_case, escape_double_quoted, handler_name, js_literal, kebab_case, pascal_case,
    sample_literal, CodeBuffer, GenerateError,
};
use blueprint_schema::{
    binding_expression, text_binding, Children, ComponentDefinition, ComponentKind,
    ComponentMetadata, EventHandler, GenerationResult, GeneratorConfig, PropType,
    StylingApproach,
};
use serde_json::{json, Value};

use crate::project::component_dependencies;

/// Generate one React component: implementation file, stylesheet, test
/// file, and a barrel re-export.
pub fn generate_component(
    metadata: &ComponentMetadata,
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if metadata.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "component name is empty".to_string(),
        ));
    }

    let name = pascal_case(&metadata.name);
    let ext = if config.typescript { "tsx" } else { "jsx" };
    let handlers = collect_handlers(&metadata.definition)?;
    let source = render_component_file(&name, metadata, &handlers, config)?;

    let mut result = GenerationResult::new();
    result.add_file(format!("{}.{}", name, ext), source);
    if let Some(style_file) = stylesheet_name(&name, config) {
        result.add_file(style_file, render_stylesheet(&name));
    }
    if config.testing {
        result.add_file(
            format!("{}.test.{}", name, ext),
            render_test_file(&name, metadata, config),
        );
    }
    result.add_file(
        format!("index.{}", if config.typescript { "ts" } else { "js" }),
        render_barrel(&name, metadata, config),
    );

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("react"));
    result.set_metadata("component", json!(name));
    Ok(result)
}

/// One discovered event handler: the synthesized function name, the event
/// it came from, and its spec.
pub(crate) struct Handler {
    pub name: String,
    pub spec: EventHandler,
}

/// Walk the tree collecting event handlers in discovery order. Handler
/// names derive from event names; the first occurrence of a name wins so
/// repeated events share one function.
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

fn stylesheet_name(name: &str, config: &GeneratorConfig) -> Option<String> {
    match config.styling {
        Some(StylingApproach::StyledComponents) | Some(StylingApproach::Emotion) => None,
        Some(StylingApproach::CssModules) => Some(format!("{}.module.css", name)),
        None => Some(format!("{}.css", name)),
    }
}

fn render_component_file(
    name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();

    // Imports
    if metadata.state.is_empty() || metadata.kind == ComponentKind::Class {
        buf.add_line("import React from \"react\";");
    } else {
        buf.add_line("import React, { useState } from \"react\";");
    }
    match stylesheet_name(name, config) {
        Some(style_file) if config.styling == Some(StylingApproach::CssModules) => {
            buf.add_line(&format!("import styles from \"./{}\";", style_file));
        }
        Some(style_file) => {
            buf.add_line(&format!("import \"./{}\";", style_file));
        }
        None => {}
    }
    buf.blank();

    // Typed prop declarations
    if config.typescript && !metadata.props_schema.is_empty() {
        buf.add_line(&format!("export interface {}Props {{", name));
        buf.indent();
        for (prop, spec) in &metadata.props_schema {
            let optional = if spec.required { "" } else { "?" };
            buf.add_line(&format!("{}{}: {};", prop, optional, spec.prop_type.typescript()));
        }
        buf.dedent();
        buf.add_line("}");
        buf.blank();
    }

    match metadata.kind {
        ComponentKind::Functional => {
            render_function_component(&mut buf, name, metadata, handlers, config)?
        }
        ComponentKind::Class => render_class_component(&mut buf, name, metadata, handlers, config)?,
    }

    buf.blank();
    buf.add_line(&format!("export default {};", name));
    Ok(buf.into_output())
}

fn render_function_component(
    buf: &mut CodeBuffer,
    name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<(), GenerateError> {
    let params = destructured_props(metadata);
    if config.typescript {
        let props_type = if metadata.props_schema.is_empty() {
            "React.FC".to_string()
        } else {
            format!("React.FC<{}Props>", name)
        };
        buf.add_line(&format!("export const {}: {} = ({}) => {{", name, props_type, params));
    } else {
        buf.add_line(&format!("export const {} = ({}) => {{", name, params));
    }
    buf.indent();

    for (state_name, spec) in &metadata.state {
        buf.add_line(&format!(
            "const [{}, set{}] = useState({});",
            state_name,
            pascal_case(state_name),
            js_literal(&spec.initial)
        ));
    }
    if !metadata.state.is_empty() {
        buf.blank();
    }

    for handler in handlers {
        let params = handler_params(&handler.spec, config);
        buf.add_line(&format!("const {} = ({}) => {{", handler.name, params));
        buf.indent();
        for line in handler.spec.body().lines() {
            buf.add_line(line);
        }
        buf.dedent();
        buf.add_line("};");
        buf.blank();
    }

    buf.add_line("return (");
    buf.indent();
    render_node(buf, &metadata.definition, false)?;
    buf.dedent();
    buf.add_line(");");

    buf.dedent();
    buf.add_line("};");
    Ok(())
}

fn render_class_component(
    buf: &mut CodeBuffer,
    name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<(), GenerateError> {
    if config.typescript {
        let props_type = if metadata.props_schema.is_empty() {
            "{}".to_string()
        } else {
            format!("{}Props", name)
        };
        buf.add_line(&format!(
            "export class {} extends React.Component<{}> {{",
            name, props_type
        ));
    } else {
        buf.add_line(&format!("export class {} extends React.Component {{", name));
    }
    buf.indent();

    if !metadata.state.is_empty() {
        let fields = metadata
            .state
            .iter()
            .map(|(state_name, spec)| format!("{}: {}", state_name, js_literal(&spec.initial)))
            .collect::<Vec<_>>()
            .join(", ");
        buf.add_line(&format!("state = {{ {} }};", fields));
        buf.blank();
    }

    for handler in handlers {
        let params = handler_params(&handler.spec, config);
        buf.add_line(&format!("{} = ({}) => {{", handler.name, params));
        buf.indent();
        for line in handler.spec.body().lines() {
            buf.add_line(line);
        }
        buf.dedent();
        buf.add_line("};");
        buf.blank();
    }

    buf.add_line("render() {");
    buf.indent();
    buf.add_line("return (");
    buf.indent();
    render_node(buf, &metadata.definition, true)?;
    buf.dedent();
    buf.add_line(");");
    buf.dedent();
    buf.add_line("}");

    buf.dedent();
    buf.add_line("}");
    Ok(())
}

fn destructured_props(metadata: &ComponentMetadata) -> String {
    if metadata.props_schema.is_empty() {
        return String::new();
    }
    let bindings = metadata
        .props_schema
        .iter()
        .map(|(prop, spec)| match &spec.default {
            Some(default) => format!("{} = {}", prop, js_literal(default)),
            None => prop.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", bindings)
}

fn handler_params(spec: &EventHandler, config: &GeneratorConfig) -> String {
    spec.parameters()
        .iter()
        .map(|param| {
            if config.typescript {
                format!("{}: any", param)
            } else {
                param.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recursively render a definition node as JSX.
pub(crate) fn render_node(
    buf: &mut CodeBuffer,
    node: &ComponentDefinition,
    class_component: bool,
) -> Result<(), GenerateError> {
    if node.tag.is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "node has an empty 'type'".to_string(),
        ));
    }

    let mut attrs = Vec::new();
    for (prop, value) in &node.props {
        if let Some(attr) = render_prop(prop, value) {
            attrs.push(attr);
        }
    }
    for event in node.events.keys() {
        let prefix = if class_component { "this." } else { "" };
        attrs.push(format!(
            "on{}={{{}{}}}",
            pascal_case(event),
            prefix,
            handler_name(event)
        ));
    }
    if !node.styles.is_empty() {
        let entries = node
            .styles
            .iter()
            .map(|(property, value)| {
                format!("{}: \"{}\"", camel_case(property), escape_double_quoted(value))
            })
            .collect::<Vec<_>>()
            .join(", ");
        attrs.push(format!("style={{{{ {} }}}}", entries));
    }

    let attr_text = if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    };

    match &node.children {
        Children::None => {
            buf.add_line(&format!("<{}{} />", node.tag, attr_text));
        }
        Children::Text(text) => {
            buf.add_line(&format!("<{}{}>", node.tag, attr_text));
            buf.indent();
            match text_binding(text) {
                Some(expression) => buf.add_line(&format!("{{{}}}", expression)),
                None => buf.add_line(text),
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", node.tag));
        }
        Children::Nodes(children) if children.is_empty() => {
            buf.add_line(&format!("<{}{} />", node.tag, attr_text));
        }
        Children::Nodes(children) => {
            buf.add_line(&format!("<{}{}>", node.tag, attr_text));
            buf.indent();
            for child in children {
                render_node(buf, child, class_component)?;
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", node.tag));
        }
    }
    Ok(())
}

fn render_prop(name: &str, value: &Value) -> Option<String> {
    // React spells some HTML attributes differently
    let react_prop = match name {
        "class" => "className",
        "for" => "htmlFor",
        other => other,
    };

    if let Some(expression) = binding_expression(value) {
        return Some(format!("{}={{{}}}", react_prop, expression));
    }

    match value {
        Value::String(literal) => Some(format!(
            "{}=\"{}\"",
            react_prop,
            escape_double_quoted(literal)
        )),
        Value::Bool(true) => Some(react_prop.to_string()),
        Value::Bool(false) => Some(format!("{}={{false}}", react_prop)),
        Value::Number(number) => Some(format!("{}={{{}}}", react_prop, number)),
        Value::Null => None,
        composite => Some(format!("{}={{{}}}", react_prop, js_literal(composite))),
    }
}

fn render_stylesheet(name: &str) -> String {
    format!("/* Styles for {} */\n.{} {{\n}}\n", name, kebab_case(name))
}

fn render_test_file(name: &str, metadata: &ComponentMetadata, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { render } from \"@testing-library/react\";");
    buf.add_line(&format!("import {{ {} }} from \"./{}\";", name, name));
    buf.blank();
    buf.add_line(&format!("describe(\"{}\", () => {{", name));
    buf.indent();
    buf.add_line("it(\"renders\", () => {");
    buf.indent();
    buf.add_line(&format!("render(<{}{} />);", name, sample_props(metadata, config)));
    buf.dedent();
    buf.add_line("});");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}

fn sample_props(metadata: &ComponentMetadata, _config: &GeneratorConfig) -> String {
    let mut out = String::new();
    for (prop, spec) in &metadata.props_schema {
        if !spec.required {
            continue;
        }
        match spec.prop_type {
            PropType::String => out.push_str(&format!(" {}=\"example\"", prop)),
            other => out.push_str(&format!(" {}={{{}}}", prop, sample_literal(other))),
        }
    }
    out
}

fn render_barrel(name: &str, metadata: &ComponentMetadata, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line(&format!("export {{ {} }} from \"./{}\";", name, name));
    if config.typescript && !metadata.props_schema.is_empty() {
        buf.add_line(&format!("export type {{ {}Props }} from \"./{}\";", name, name));
    }
    buf.into_output()
}
