use blueprint_common::{pascal_case, CodeBuffer, GenerateError};
use blueprint_schema::{
    ComponentMetadata, GenerationResult, GeneratorConfig, PageDefinition,
};
use serde_json::json;

use crate::component::{collect_handlers, render_node, Handler};
use crate::project::component_dependencies;

/// Generate a page-level container that composes the given components.
pub fn generate_page(
    page: &PageDefinition,
    components: &[ComponentMetadata],
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if page.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "page name is empty".to_string(),
        ));
    }

    let base = pascal_case(&page.name);
    let page_name = if base.ends_with("Page") {
        base
    } else {
        format!("{}Page", base)
    };
    let ext = if config.typescript { "tsx" } else { "jsx" };
    let handlers = collect_handlers(&page.definition)?;
    let source = render_page_file(&page_name, page, components, &handlers, config)?;

    let mut result = GenerationResult::new();
    result.add_file(format!("pages/{}.{}", page_name, ext), source);

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("react"));
    result.set_metadata("page", json!(page_name));
    result.set_metadata("route", json!(page.route));
    Ok(result)
}

fn render_page_file(
    page_name: &str,
    page: &PageDefinition,
    components: &[ComponentMetadata],
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();

    buf.add_line("import React from \"react\";");
    for component in components {
        let name = pascal_case(&component.name);
        buf.add_line(&format!(
            "import {{ {} }} from \"../components/{}\";",
            name, name
        ));
    }
    buf.blank();

    if config.typescript {
        buf.add_line(&format!("export const {}: React.FC = () => {{", page_name));
    } else {
        buf.add_line(&format!("export const {} = () => {{", page_name));
    }
    buf.indent();

    for handler in handlers {
        buf.add_line(&format!("const {} = () => {{", handler.name));
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
    render_node(&mut buf, &page.definition, false)?;
    buf.dedent();
    buf.add_line(");");
    buf.dedent();
    buf.add_line("};");
    buf.blank();

    if config.routing {
        buf.add_line("export const route = {");
        buf.indent();
        buf.add_line(&format!("path: \"{}\",", page.route));
        buf.add_line(&format!("element: <{} />,", page_name));
        buf.dedent();
        buf.add_line("};");
        buf.blank();
    }

    buf.add_line(&format!("export default {};", page_name));
    Ok(buf.into_output())
}
