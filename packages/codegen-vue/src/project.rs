use blueprint_common::{CodeBuffer, GenerateError};
use blueprint_schema::{
    BuildTool, GenerationResult, GeneratorConfig, ProjectDefinition, StateLibrary,
};
use serde_json::{json, Map};

pub(crate) fn component_dependencies(config: &GeneratorConfig) -> Vec<String> {
    let mut deps = vec!["vue".to_string()];
    if config.routing {
        deps.push("vue-router".to_string());
    }
    match config.state_management {
        Some(StateLibrary::Pinia) => deps.push("pinia".to_string()),
        Some(StateLibrary::Vuex) => deps.push("vuex".to_string()),
        _ => {}
    }
    if config.typescript {
        deps.push("typescript".to_string());
    }
    if config.testing {
        deps.push("vitest".to_string());
        deps.push("@vue/test-utils".to_string());
    }
    deps
}

fn npm_version(package: &str) -> &'static str {
    match package {
        "vue" => "^3.4.0",
        "vue-router" => "^4.3.0",
        "pinia" => "^2.1.0",
        "vuex" => "^4.1.0",
        "typescript" => "^5.4.0",
        "vite" => "^5.2.0",
        "@vitejs/plugin-vue" => "^5.0.0",
        "vitest" => "^1.4.0",
        "@vue/test-utils" => "^2.4.0",
        "vue-tsc" => "^2.0.0",
        "jsdom" => "^24.0.0",
        _ => "latest",
    }
}

/// Generate whole-project scaffolding for a Vue app.
pub fn generate_project(
    project: &ProjectDefinition,
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if project.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "project name is empty".to_string(),
        ));
    }

    let script_ext = if config.typescript { "ts" } else { "js" };

    let mut result = GenerationResult::new();
    result.add_file("package.json", render_package_json(project, config));
    result.add_file("index.html", render_index_html(project, script_ext));
    result.add_file(format!("src/main.{}", script_ext), render_main(config));
    result.add_file("src/App.vue", render_app(project, config));
    result.add_file("src/style.css", render_global_styles());
    result.add_file(
        format!("vite.config.{}", script_ext),
        render_vite_config(config),
    );
    if config.typescript {
        result.add_file("tsconfig.json", render_tsconfig());
    }
    if config.routing {
        result.add_file(
            format!("src/router/index.{}", script_ext),
            render_router(config),
        );
    }
    if config.state_management == Some(StateLibrary::Vuex) {
        result.add_file(format!("src/store/index.{}", script_ext), render_vuex_store());
    }
    result.add_file("README.md", render_readme(project));
    result.add_file(".gitignore", render_gitignore());

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("vue"));
    result.set_metadata("project", json!(project.name));
    Ok(result)
}

fn render_package_json(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut scripts = Map::new();
    scripts.insert("dev".to_string(), json!("vite"));
    if config.typescript {
        scripts.insert("build".to_string(), json!("vue-tsc && vite build"));
    } else {
        scripts.insert("build".to_string(), json!("vite build"));
    }
    scripts.insert("preview".to_string(), json!("vite preview"));
    if config.testing {
        scripts.insert("test".to_string(), json!("vitest"));
    }

    let mut dependencies = Map::new();
    let mut dev_dependencies = Map::new();
    for package in component_dependencies(config) {
        let target = if is_dev_dependency(&package) {
            &mut dev_dependencies
        } else {
            &mut dependencies
        };
        target.insert(package.clone(), json!(npm_version(&package)));
    }
    dev_dependencies.insert("vite".to_string(), json!(npm_version("vite")));
    dev_dependencies.insert(
        "@vitejs/plugin-vue".to_string(),
        json!(npm_version("@vitejs/plugin-vue")),
    );
    if config.typescript {
        dev_dependencies.insert("vue-tsc".to_string(), json!(npm_version("vue-tsc")));
    }
    if config.testing {
        dev_dependencies.insert("jsdom".to_string(), json!(npm_version("jsdom")));
    }

    let manifest = json!({
        "name": project.name,
        "description": project.description,
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": scripts,
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default() + "\n"
}

fn is_dev_dependency(package: &str) -> bool {
    matches!(package, "typescript" | "vitest" | "@vue/test-utils")
}

fn render_index_html(project: &ProjectDefinition, script_ext: &str) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("<!DOCTYPE html>");
    buf.add_line("<html lang=\"en\">");
    buf.indent();
    buf.add_line("<head>");
    buf.indent();
    buf.add_line("<meta charset=\"UTF-8\">");
    buf.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    buf.add_line(&format!("<title>{}</title>", project.name));
    buf.dedent();
    buf.add_line("</head>");
    buf.add_line("<body>");
    buf.indent();
    buf.add_line("<div id=\"app\"></div>");
    buf.add_line(&format!(
        "<script type=\"module\" src=\"/src/main.{}\"></script>",
        script_ext
    ));
    buf.dedent();
    buf.add_line("</body>");
    buf.dedent();
    buf.add_line("</html>");
    buf.into_output()
}

fn render_main(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { createApp } from \"vue\";");
    buf.add_line("import App from \"./App.vue\";");
    buf.add_line("import \"./style.css\";");
    if config.routing {
        buf.add_line("import router from \"./router\";");
    }
    if config.state_management == Some(StateLibrary::Pinia) {
        buf.add_line("import { createPinia } from \"pinia\";");
    }
    if config.state_management == Some(StateLibrary::Vuex) {
        buf.add_line("import store from \"./store\";");
    }
    buf.blank();
    buf.add_line("const app = createApp(App);");
    if config.routing {
        buf.add_line("app.use(router);");
    }
    if config.state_management == Some(StateLibrary::Pinia) {
        buf.add_line("app.use(createPinia());");
    }
    if config.state_management == Some(StateLibrary::Vuex) {
        buf.add_line("app.use(store);");
    }
    buf.add_line("app.mount(\"#app\");");
    buf.into_output()
}

fn render_app(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("<template>");
    buf.indent();
    if config.routing {
        buf.add_line("<router-view />");
    } else {
        buf.add_line("<main class=\"app\">");
        buf.indent();
        buf.add_line(&format!("<h1>{}</h1>", project.name));
        buf.dedent();
        buf.add_line("</main>");
    }
    buf.dedent();
    buf.add_line("</template>");
    buf.blank();
    if config.typescript {
        buf.add_line("<script setup lang=\"ts\"></script>");
    } else {
        buf.add_line("<script setup></script>");
    }
    buf.into_output()
}

fn render_global_styles() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line(":root {");
    buf.indent();
    buf.add_line("font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;");
    buf.add_line("line-height: 1.5;");
    buf.dedent();
    buf.add_line("}");
    buf.blank();
    buf.add_line("body {");
    buf.indent();
    buf.add_line("margin: 0;");
    buf.add_line("min-height: 100vh;");
    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

fn render_vite_config(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { defineConfig } from \"vite\";");
    buf.add_line("import vue from \"@vitejs/plugin-vue\";");
    buf.blank();
    buf.add_line("export default defineConfig({");
    buf.indent();
    buf.add_line("plugins: [vue()],");
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

fn render_tsconfig() -> String {
    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2020",
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "moduleResolution": "bundler",
            "jsx": "preserve",
            "strict": true,
            "skipLibCheck": true,
            "noEmit": true,
        },
        "include": ["src/**/*.ts", "src/**/*.vue"],
    });
    serde_json::to_string_pretty(&tsconfig).unwrap_or_default() + "\n"
}

fn render_router(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { createRouter, createWebHistory } from \"vue-router\";");
    if config.typescript {
        buf.add_line("import type { RouteRecordRaw } from \"vue-router\";");
    }
    buf.blank();
    if config.typescript {
        buf.add_line("const routes: RouteRecordRaw[] = [];");
    } else {
        buf.add_line("const routes = [];");
    }
    buf.blank();
    buf.add_line("export default createRouter({");
    buf.indent();
    buf.add_line("history: createWebHistory(),");
    buf.add_line("routes,");
    buf.dedent();
    buf.add_line("});");
    buf.into_output()
}

fn render_vuex_store() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { createStore } from \"vuex\";");
    buf.blank();
    buf.add_line("export default createStore({");
    buf.indent();
    buf.add_line("state: {},");
    buf.add_line("mutations: {},");
    buf.add_line("actions: {},");
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
