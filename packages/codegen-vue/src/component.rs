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

/// Generate one Vue single-file component plus its test file.
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
    let handlers = collect_handlers(&metadata.definition)?;
    let source = render_sfc(&name, metadata, &handlers, config)?;

    let mut result = GenerationResult::new();
    result.add_file(format!("{}.vue", name), source);
    if config.testing {
        let ext = if config.typescript { "ts" } else { "js" };
        result.add_file(format!("{}.spec.{}", name, ext), render_test_file(&name));
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vue"));
    result.set_metadata("component", json!(name));
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

fn render_sfc(
    name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();

    buf.add_line("<template>");
    buf.indent();
    render_node(&mut buf, &metadata.definition)?;
    buf.dedent();
    buf.add_line("</template>");
    buf.blank();

    if config.composition_api {
        render_setup_script(&mut buf, metadata, handlers, config);
    } else {
        render_options_script(&mut buf, name, metadata, handlers, config);
    }

    buf.blank();
    buf.add_line("<style scoped>");
    buf.add_line(&format!(".{} {{", kebab_case(name)));
    buf.add_line("}");
    buf.add_line("</style>");
    Ok(buf.into_output())
}

fn render_setup_script(
    buf: &mut CodeBuffer,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) {
    if config.typescript {
        buf.add_line("<script setup lang=\"ts\">");
    } else {
        buf.add_line("<script setup>");
    }

    if !metadata.state.is_empty() {
        buf.add_line("import { ref } from \"vue\";");
        buf.blank();
    }

    if !metadata.props_schema.is_empty() {
        if config.typescript {
            buf.add_line("interface Props {");
            buf.indent();
            for (prop, spec) in &metadata.props_schema {
                let optional = if spec.required { "" } else { "?" };
                buf.add_line(&format!("{}{}: {};", prop, optional, spec.prop_type.typescript()));
            }
            buf.dedent();
            buf.add_line("}");
            buf.blank();

            let defaults: Vec<(&String, &Value)> = metadata
                .props_schema
                .iter()
                .filter_map(|(prop, spec)| spec.default.as_ref().map(|d| (prop, d)))
                .collect();
            if defaults.is_empty() {
                buf.add_line("const props = defineProps<Props>();");
            } else {
                buf.add_line("const props = withDefaults(defineProps<Props>(), {");
                buf.indent();
                for (prop, default) in defaults {
                    buf.add_line(&format!("{}: {},", prop, js_literal(default)));
                }
                buf.dedent();
                buf.add_line("});");
            }
        } else {
            buf.add_line("const props = defineProps({");
            buf.indent();
            for (prop, spec) in &metadata.props_schema {
                let mut fields = vec![format!("type: {}", spec.prop_type.vue_constructor())];
                if spec.required {
                    fields.push("required: true".to_string());
                }
                if let Some(default) = &spec.default {
                    fields.push(format!("default: {}", js_literal(default)));
                }
                buf.add_line(&format!("{}: {{ {} }},", prop, fields.join(", ")));
            }
            buf.dedent();
            buf.add_line("});");
        }
        buf.blank();
    }

    for (state_name, spec) in &metadata.state {
        buf.add_line(&format!(
            "const {} = ref({});",
            state_name,
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

    buf.add_line("</script>");
}

fn render_options_script(
    buf: &mut CodeBuffer,
    name: &str,
    metadata: &ComponentMetadata,
    handlers: &[Handler],
    config: &GeneratorConfig,
) {
    if config.typescript {
        buf.add_line("<script lang=\"ts\">");
        buf.add_line("import { defineComponent } from \"vue\";");
        buf.blank();
        buf.add_line("export default defineComponent({");
    } else {
        buf.add_line("<script>");
        buf.add_line("export default {");
    }
    buf.indent();
    buf.add_line(&format!("name: \"{}\",", name));

    if !metadata.props_schema.is_empty() {
        buf.add_line("props: {");
        buf.indent();
        for (prop, spec) in &metadata.props_schema {
            let mut fields = vec![format!("type: {}", spec.prop_type.vue_constructor())];
            if spec.required {
                fields.push("required: true".to_string());
            }
            if let Some(default) = &spec.default {
                fields.push(format!("default: {}", js_literal(default)));
            }
            buf.add_line(&format!("{}: {{ {} }},", prop, fields.join(", ")));
        }
        buf.dedent();
        buf.add_line("},");
    }

    if !metadata.state.is_empty() {
        buf.add_line("data() {");
        buf.indent();
        buf.add_line("return {");
        buf.indent();
        for (state_name, spec) in &metadata.state {
            buf.add_line(&format!("{}: {},", state_name, js_literal(&spec.initial)));
        }
        buf.dedent();
        buf.add_line("};");
        buf.dedent();
        buf.add_line("},");
    }

    if !handlers.is_empty() {
        buf.add_line("methods: {");
        buf.indent();
        for handler in handlers {
            let params = handler_params(&handler.spec, config);
            buf.add_line(&format!("{}({}) {{", handler.name, params));
            buf.indent();
            for line in handler.spec.body().lines() {
                buf.add_line(line);
            }
            buf.dedent();
            buf.add_line("},");
        }
        buf.dedent();
        buf.add_line("},");
    }

    buf.dedent();
    if config.typescript {
        buf.add_line("});");
    } else {
        buf.add_line("};");
    }
    buf.add_line("</script>");
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

/// Recursively render a definition node as Vue template markup.
pub(crate) fn render_node(
    buf: &mut CodeBuffer,
    node: &ComponentDefinition,
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
        attrs.push(format!("@{}=\"{}\"", event, handler_name(event)));
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
            buf.add_line(&format!("<{}{} />", node.tag, attr_text));
        }
        Children::Text(text) => {
            buf.add_line(&format!("<{}{}>", node.tag, attr_text));
            buf.indent();
            match text_binding(text) {
                Some(expression) => buf.add_line(&format!("{{{{ {} }}}}", expression)),
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
                render_node(buf, child)?;
            }
            buf.dedent();
            buf.add_line(&format!("</{}>", node.tag));
        }
    }
    Ok(())
}

fn render_prop(name: &str, value: &Value) -> Option<String> {
    // Vue templates use plain HTML attribute names
    let vue_prop = match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    };

    if let Some(expression) = binding_expression(value) {
        return Some(format!("{}=\"{}\"", bound(vue_prop), expression));
    }

    match value {
        Value::String(literal) => {
            Some(format!("{}=\"{}\"", vue_prop, escape_double_quoted(literal)))
        }
        Value::Bool(true) => Some(vue_prop.to_string()),
        Value::Bool(false) => Some(format!("{}=\"false\"", bound(vue_prop))),
        Value::Number(number) => Some(format!("{}=\"{}\"", bound(vue_prop), number)),
        Value::Null => None,
        composite => Some(format!("{}='{}'", bound(vue_prop), js_literal(composite))),
    }
}

/// `:prop` shorthand, unless the name is already a directive.
fn bound(name: &str) -> String {
    if name.starts_with("v-") || name.starts_with(':') || name.starts_with('@') {
        name.to_string()
    } else {
        format!(":{}", name)
    }
}

fn render_test_file(name: &str) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { mount } from \"@vue/test-utils\";");
    buf.add_line("import { describe, expect, it } from \"vitest\";");
    buf.add_line(&format!("import {} from \"./{}.vue\";", name, name));
    buf.blank();
    buf.add_line(&format!("describe(\"{}\", () => {{", name));
    buf.indent();
    buf.add_line("it(\"mounts\", () => {");
    buf.indent();
    buf.add_line(&format!("const wrapper = mount({});", name));
    buf.add_line("expect(wrapper.exists()).toBe(true);");
    buf.dedent();
    buf.add_line("});");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}
