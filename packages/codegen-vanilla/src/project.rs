use blueprint_common::{CodeBuffer, GenerateError};
use blueprint_schema::{GenerationResult, GeneratorConfig, ProjectDefinition};
use serde_json::{json, Map};

pub(crate) fn component_dependencies(config: &GeneratorConfig) -> Vec<String> {
    let mut deps = Vec::new();
    if config.testing {
        deps.push("vitest".to_string());
        deps.push("jsdom".to_string());
    }
    deps
}

fn npm_version(package: &str) -> &'static str {
    match package {
        "vite" => "^5.2.0",
        "vitest" => "^1.4.0",
        "jsdom" => "^24.0.0",
        _ => "latest",
    }
}

/// Generate whole-project scaffolding for a plain JavaScript app. Vite is
/// used for the dev server and bundling; there are no runtime dependencies.
pub fn generate_project(
    project: &ProjectDefinition,
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if project.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "project name is empty".to_string(),
        ));
    }

    let mut result = GenerationResult::new();
    result.add_file("package.json", render_package_json(project, config));
    result.add_file("index.html", render_index_html(project, config));
    result.add_file("src/main.js", render_main(config));
    result.add_file("src/styles.css", render_global_styles());
    result.add_file("vite.config.js", render_vite_config(config));
    if config.pwa {
        result.add_file("public/manifest.webmanifest", render_manifest(project));
        result.add_file("src/sw.js", render_service_worker(project));
    }
    result.add_file("README.md", render_readme(project));
    result.add_file(".gitignore", render_gitignore());

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vanilla"));
    result.set_metadata("project", json!(project.name));
    Ok(result)
}

fn render_package_json(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut scripts = Map::new();
    scripts.insert("dev".to_string(), json!("vite"));
    scripts.insert("build".to_string(), json!("vite build"));
    scripts.insert("preview".to_string(), json!("vite preview"));
    if config.testing {
        scripts.insert("test".to_string(), json!("vitest"));
    }

    let mut dev_dependencies = Map::new();
    dev_dependencies.insert("vite".to_string(), json!(npm_version("vite")));
    for package in component_dependencies(config) {
        dev_dependencies.insert(package.clone(), json!(npm_version(&package)));
    }

    let manifest = json!({
        "name": project.name,
        "description": project.description,
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": scripts,
        "devDependencies": dev_dependencies,
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default() + "\n"
}

fn render_index_html(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("<!DOCTYPE html>");
    buf.add_line("<html lang=\"en\">");
    buf.indent();
    buf.add_line("<head>");
    buf.indent();
    buf.add_line("<meta charset=\"UTF-8\">");
    buf.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    buf.add_line(&format!("<title>{}</title>", project.name));
    if config.pwa {
        buf.add_line("<link rel=\"manifest\" href=\"/manifest.webmanifest\">");
    }
    buf.dedent();
    buf.add_line("</head>");
    buf.add_line("<body>");
    buf.indent();
    buf.add_line("<div id=\"app\"></div>");
    buf.add_line("<script type=\"module\" src=\"/src/main.js\"></script>");
    buf.dedent();
    buf.add_line("</body>");
    buf.dedent();
    buf.add_line("</html>");
    buf.into_output()
}

fn render_main(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import \"./styles.css\";");
    buf.blank();
    buf.add_line("const app = document.querySelector(\"#app\");");
    buf.add_line("app.innerHTML = \"<h1>Hello</h1>\";");
    if config.pwa {
        buf.blank();
        buf.add_line("if (\"serviceWorker\" in navigator) {");
        buf.indent();
        buf.add_line("navigator.serviceWorker.register(\"/src/sw.js\");");
        buf.dedent();
        buf.add_line("}");
    }
    buf.into_output()
}

fn render_global_styles() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("body {");
    buf.indent();
    buf.add_line("margin: 0;");
    buf.add_line("font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;");
    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

fn render_vite_config(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { defineConfig } from \"vite\";");
    buf.blank();
    buf.add_line("export default defineConfig({");
    buf.indent();
    if config.testing {
        buf.add_line("test: {");
        buf.indent();
        buf.add_line("environment: \"jsdom\",");
        buf.dedent();
        buf.add_line("},");
    }
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}

fn render_manifest(project: &ProjectDefinition) -> String {
    let manifest = json!({
        "name": project.name,
        "short_name": project.name,
        "start_url": "/",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": "#ffffff",
        "icons": [],
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default() + "\n"
}

fn render_service_worker(project: &ProjectDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line(&format!("const CACHE_NAME = \"{}-v1\";", project.name));
    buf.blank();
    buf.add_line("self.addEventListener(\"install\", (event) => {");
    buf.indent();
    buf.add_line("event.waitUntil(caches.open(CACHE_NAME).then((cache) => cache.addAll([\"/\"])));");
    buf.dedent();
    buf.add_line("});");
    buf.blank();
    buf.add_line("self.addEventListener(\"fetch\", (event) => {");
    buf.indent();
    buf.add_line("event.respondWith(");
    buf.indent();
    buf.add_line("caches.match(event.request).then((cached) => cached || fetch(event.request))");
    buf.dedent();
    buf.add_line(");");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}

fn render_readme(project: &ProjectDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line(&format!("# {}", project.name));
    buf.blank();
    if !project.description.is_empty() {
        buf.add_line(&project.description);
        buf.blank();
    }
    buf.add_line("## Getting started");
    buf.blank();
    buf.add_line("```sh");
    buf.add_line("npm install");
    buf.add_line("npm run dev");
    buf.add_line("```");
    buf.into_output()
}

fn render_gitignore() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("node_modules/");
    buf.add_line("dist/");
    buf.add_line(".env");
    buf.add_line("*.log");
    buf.into_output()
}
