use blueprint_common::{kebab_case, pascal_case, CodeBuffer, GenerateError};
use blueprint_schema::{
    ComponentMetadata, GenerationResult, GeneratorConfig, PageDefinition,
};
use serde_json::json;

use crate::component::{collect_handlers, render_template, Handler};
use crate::project::component_dependencies;

/// Generate a page-level component that composes the given components,
/// plus a route table when routing is enabled.
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
    let handlers = collect_handlers(&page.definition)?;

    let mut result = GenerationResult::new();
    result.add_file(
        format!("pages/{}.component.ts", file_base),
        render_page_class(&page_name, &file_base, components, &handlers, config),
    );
    result.add_file(
        format!("pages/{}.component.html", file_base),
        render_template(&page.definition)?,
    );
    result.add_file(
        format!("pages/{}.component.css", file_base),
        format!("/* Styles for {} */\n", page_name),
    );
    if config.routing {
        result.add_file(
            format!("pages/{}.routes.ts", kebab_case(&page.name)),
            render_routes(&page_name, &file_base, page),
        );
    }

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("angular"));
    result.set_metadata("page", json!(format!("{}Component", page_name)));
    result.set_metadata("route", json!(page.route));
    Ok(result)
}

fn render_page_class(
    page_name: &str,
    file_base: &str,
    components: &[ComponentMetadata],
    handlers: &[Handler],
    config: &GeneratorConfig,
) -> String {
    let mut buf = CodeBuffer::new();

    buf.add_line("import { Component } from \"@angular/core\";");
    buf.add_line("import { CommonModule } from \"@angular/common\";");
    for component in components {
        let name = pascal_case(&component.name);
        buf.add_line(&format!(
            "import {{ {}Component }} from \"../components/{}.component\";",
            name,
            kebab_case(&name)
        ));
    }
    buf.blank();

    let mut imports = vec!["CommonModule".to_string()];
    for component in components {
        imports.push(format!("{}Component", pascal_case(&component.name)));
    }

    buf.add_line("@Component({");
    buf.indent();
    buf.add_line(&format!("selector: \"app-{}\",", file_base));
    if config.standalone {
        buf.add_line("standalone: true,");
        buf.add_line(&format!("imports: [{}],", imports.join(", ")));
    }
    buf.add_line(&format!("templateUrl: \"./{}.component.html\",", file_base));
    buf.add_line(&format!("styleUrls: [\"./{}.component.css\"],", file_base));
    buf.dedent();
    buf.add_line("})");

    buf.add_line(&format!("export class {}Component {{", page_name));
    buf.indent();
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
    }
    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

fn render_routes(page_name: &str, file_base: &str, page: &PageDefinition) -> String {
    // Angular route paths have no leading slash
    let path = page.route.trim_start_matches('/');

    let mut buf = CodeBuffer::new();
    buf.add_line("import { Routes } from \"@angular/router\";");
    buf.add_line(&format!(
        "import {{ {}Component }} from \"./{}.component\";",
        page_name, file_base
    ));
    buf.blank();
    buf.add_line("export const routes: Routes = [");
    buf.indent();
    buf.add_line(&format!(
        "{{ path: \"{}\", component: {}Component }},",
        path, page_name
    ));
    buf.dedent();
    buf.add_line("];");
    buf.into_output()
}
