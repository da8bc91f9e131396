use blueprint_common::{kebab_case, pascal_case, CodeBuffer, GenerateError};
use blueprint_schema::{
    ComponentMetadata, GenerationResult, GeneratorConfig, PageDefinition,
};
use serde_json::json;

use crate::component::{collect_handlers, render_node, Handler};
use crate::project::component_dependencies;

/// Generate a page-level SFC that composes the given components, plus a
/// lazy route record when routing is enabled.
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
    let handlers = collect_handlers(&page.definition)?;
    let source = render_page_sfc(page, components, &handlers, config)?;

    let mut result = GenerationResult::new();
    result.add_file(format!("pages/{}.vue", page_name), source);
    if config.routing {
        let ext = if config.typescript { "ts" } else { "js" };
        result.add_file(
            format!("pages/{}.route.{}", kebab_case(&page_name), ext),
            render_route_record(&page_name, page),
        );
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vue"));
    result.set_metadata("page", json!(page_name));
    result.set_metadata("route", json!(page.route));
    Ok(result)
}

fn render_page_sfc(
    page: &PageDefinition,
    components: &[ComponentMetadata],
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let mut buf = CodeBuffer::new();

    buf.add_line("<template>");
    buf.indent();
    render_node(&mut buf, &page.definition)?;
    buf.dedent();
    buf.add_line("</template>");
    buf.blank();

    if config.typescript {
        buf.add_line("<script setup lang=\"ts\">");
    } else {
        buf.add_line("<script setup>");
    }
    for component in components {
        let name = pascal_case(&component.name);
        buf.add_line(&format!(
            "import {} from \"../components/{}.vue\";",
            name, name
        ));
    }
    if !components.is_empty() && !handlers.is_empty() {
        buf.blank();
    }
    for handler in handlers {
        buf.add_line(&format!("const {} = () => {{", handler.name));
        buf.indent();
        for line in handler.spec.body().lines() {
            buf.add_line(line);
        }
        buf.dedent();
        buf.add_line("};");
    }
    buf.add_line("</script>");
    Ok(buf.into_output())
}

fn render_route_record(page_name: &str, page: &PageDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("export default {");
    buf.indent();
    buf.add_line(&format!("path: \"{}\",", page.route));
    buf.add_line(&format!("component: () => import(\"./{}.vue\"),", page_name));
    buf.dedent();
    buf.add_line("};");
    buf.into_output()
}
