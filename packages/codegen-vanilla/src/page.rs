use blueprint_common::{kebab_case, pascal_case, CodeBuffer, GenerateError};
use blueprint_schema::{
    ComponentMetadata, GenerationResult, GeneratorConfig, PageDefinition,
};
use serde_json::json;

use crate::component::{collect_events, collect_handlers, render_node};
use crate::project::component_dependencies;

/// Generate a page-level class that composes the given components, plus a
/// route record when routing is enabled.
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
    let file_base = kebab_case(&page_name);

    let mut result = GenerationResult::new();
    result.add_file(
        format!("pages/{}.js", file_base),
        render_page_class(&page_name, page, components)?,
    );
    if config.routing {
        result.add_file(
            format!("pages/{}.route.js", kebab_case(&page.name)),
            render_route_record(&page_name, &file_base, page),
        );
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vanilla"));
    result.set_metadata("page", json!(page_name));
    result.set_metadata("route", json!(page.route));
    Ok(result)
}

fn render_page_class(
    page_name: &str,
    page: &PageDefinition,
    components: &[ComponentMetadata],
) -> Result<String, GenerateError> {
    let handlers = collect_handlers(&page.definition)?;

    let mut buf = CodeBuffer::new();
    for component in components {
        let name = pascal_case(&component.name);
        buf.add_line(&format!(
            "import {{ {} }} from \"../components/{}.js\";",
            name,
            kebab_case(&name)
        ));
    }
    if !components.is_empty() {
        buf.blank();
    }

    buf.add_line(&format!("export class {} {{", page_name));
    buf.indent();

    for handler in &handlers {
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
    render_node(&mut markup, &page.definition)?;
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
    collect_events(&page.definition, &mut events);
    buf.add_line("bindEvents(root) {");
    buf.indent();
    for event in &events {
        let dataset_key = blueprint_common::camel_case(&format!("on-{}", event));
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

fn render_route_record(page_name: &str, file_base: &str, page: &PageDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line(&format!(
        "import {{ {} }} from \"./{}.js\";",
        page_name, file_base
    ));
    buf.blank();
    buf.add_line("export default {");
    buf.indent();
    buf.add_line(&format!("path: \"{}\",", page.route));
    buf.add_line(&format!("component: {},", page_name));
    buf.dedent();
    buf.add_line("};");
    buf.into_output()
}
