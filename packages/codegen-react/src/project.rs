use blueprint_common::{CodeBuffer, GenerateError};
use blueprint_schema::{
    BuildTool, GenerationResult, GeneratorConfig, ProjectDefinition, StateLibrary,
    StylingApproach,
};
use serde_json::{json, Map, Value};

/// Runtime and tooling packages a generated component pulls in.
pub(crate) fn component_dependencies(config: &GeneratorConfig) -> Vec<String> {
    let mut deps = vec!["react".to_string(), "react-dom".to_string()];
    if config.routing {
        deps.push("react-router-dom".to_string());
    }
    match config.state_management {
        Some(StateLibrary::Redux) => {
            deps.push("@reduxjs/toolkit".to_string());
            deps.push("react-redux".to_string());
        }
        Some(StateLibrary::Zustand) => deps.push("zustand".to_string()),
        _ => {}
    }
    match config.styling {
        Some(StylingApproach::StyledComponents) => deps.push("styled-components".to_string()),
        Some(StylingApproach::Emotion) => {
            deps.push("@emotion/react".to_string());
            deps.push("@emotion/styled".to_string());
        }
        _ => {}
    }
    if config.typescript {
        deps.push("typescript".to_string());
    }
    if config.testing {
        deps.push("vitest".to_string());
        deps.push("@testing-library/react".to_string());
    }
    deps
}

/// Pinned version ranges for the npm manifest. One table keeps generated
/// manifests reproducible.
fn npm_version(package: &str) -> &'static str {
    match package {
        "react" | "react-dom" => "^18.2.0",
        "react-router-dom" => "^6.22.0",
        "@reduxjs/toolkit" => "^2.2.0",
        "react-redux" => "^9.1.0",
        "zustand" => "^4.5.0",
        "styled-components" => "^6.1.8",
        "@emotion/react" | "@emotion/styled" => "^11.11.0",
        "typescript" => "^5.4.0",
        "vite" => "^5.2.0",
        "@vitejs/plugin-react" => "^4.2.0",
        "vitest" => "^1.4.0",
        "@testing-library/react" => "^14.2.0",
        "jsdom" => "^24.0.0",
        "@types/react" => "^18.2.0",
        "@types/react-dom" => "^18.2.0",
        "webpack" => "^5.90.0",
        "webpack-cli" => "^5.1.0",
        "webpack-dev-server" => "^5.0.0",
        _ => "latest",
    }
}

/// Generate whole-project scaffolding for a React app.
pub fn generate_project(
    project: &ProjectDefinition,
    config: &GeneratorConfig,
) -> Result<GenerationResult, GenerateError> {
    if project.name.trim().is_empty() {
        return Err(GenerateError::InvalidDefinition(
            "project name is empty".to_string(),
        ));
    }

    let build_tool = config.build_tool.unwrap_or(BuildTool::Vite);
    let ext = if config.typescript { "tsx" } else { "jsx" };

    let mut result = GenerationResult::new();
    result.add_file("package.json", render_package_json(project, config, build_tool));
    result.add_file("index.html", render_index_html(project, config));
    result.add_file(format!("src/main.{}", ext), render_main(config));
    result.add_file(format!("src/App.{}", ext), render_app(project, config));
    result.add_file("src/index.css", render_global_styles());
    match build_tool {
        BuildTool::Vite => {
            let config_ext = if config.typescript { "ts" } else { "js" };
            result.add_file(
                format!("vite.config.{}", config_ext),
                render_vite_config(config),
            );
        }
        BuildTool::Webpack => {
            result.add_file("webpack.config.js", render_webpack_config(config));
        }
    }
    if config.typescript {
        result.add_file("tsconfig.json", render_tsconfig());
    }
    if let Some(store) = render_store(config) {
        let store_ext = if config.typescript { "ts" } else { "js" };
        result.add_file(format!("src/store.{}", store_ext), store);
    }
    result.add_file("README.md", render_readme(project));
    result.add_file(".gitignore", render_gitignore());

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("react"));
    result.set_metadata("project", json!(project.name));
    Ok(result)
}

fn render_package_json(
    project: &ProjectDefinition,
    config: &GeneratorConfig,
    build_tool: BuildTool,
) -> String {
    let mut scripts = Map::new();
    match build_tool {
        BuildTool::Vite => {
            scripts.insert("dev".to_string(), json!("vite"));
            scripts.insert("build".to_string(), json!("vite build"));
            scripts.insert("preview".to_string(), json!("vite preview"));
        }
        BuildTool::Webpack => {
            scripts.insert("dev".to_string(), json!("webpack serve --mode development"));
            scripts.insert("build".to_string(), json!("webpack --mode production"));
        }
    }
    if config.testing {
        scripts.insert("test".to_string(), json!("vitest"));
    }
    if config.typescript {
        scripts.insert("typecheck".to_string(), json!("tsc --noEmit"));
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
    match build_tool {
        BuildTool::Vite => {
            dev_dependencies.insert("vite".to_string(), json!(npm_version("vite")));
            dev_dependencies.insert(
                "@vitejs/plugin-react".to_string(),
                json!(npm_version("@vitejs/plugin-react")),
            );
        }
        BuildTool::Webpack => {
            for package in ["webpack", "webpack-cli", "webpack-dev-server"] {
                dev_dependencies.insert(package.to_string(), json!(npm_version(package)));
            }
        }
    }
    if config.typescript {
        dev_dependencies.insert("@types/react".to_string(), json!(npm_version("@types/react")));
        dev_dependencies.insert(
            "@types/react-dom".to_string(),
            json!(npm_version("@types/react-dom")),
        );
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
    matches!(
        package,
        "typescript" | "vitest" | "@testing-library/react"
    )
}

fn render_index_html(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let ext = if config.typescript { "tsx" } else { "jsx" };
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
    buf.add_line("<div id=\"root\"></div>");
    buf.add_line(&format!("<script type=\"module\" src=\"/src/main.{}\"></script>", ext));
    buf.dedent();
    buf.add_line("</body>");
    buf.dedent();
    buf.add_line("</html>");
    buf.into_output()
}

fn render_main(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import React from \"react\";");
    buf.add_line("import ReactDOM from \"react-dom/client\";");
    buf.add_line("import App from \"./App\";");
    buf.add_line("import \"./index.css\";");
    buf.blank();
    let root_lookup = if config.typescript {
        "document.getElementById(\"root\")!"
    } else {
        "document.getElementById(\"root\")"
    };
    buf.add_line(&format!("ReactDOM.createRoot({}).render(", root_lookup));
    buf.indent();
    buf.add_line("<React.StrictMode>");
    buf.indent();
    buf.add_line("<App />");
    buf.dedent();
    buf.add_line("</React.StrictMode>");
    buf.dedent();
    buf.add_line(");");
    buf.into_output()
}

fn render_app(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    if config.routing {
        buf.add_line("import { BrowserRouter, Route, Routes } from \"react-router-dom\";");
        buf.blank();
        buf.add_line("function App() {");
        buf.indent();
        buf.add_line("return (");
        buf.indent();
        buf.add_line("<BrowserRouter>");
        buf.indent();
        buf.add_line("<Routes>");
        buf.indent();
        buf.add_line(&format!("<Route path=\"/\" element={{<h1>{}</h1>}} />", project.name));
        buf.dedent();
        buf.add_line("</Routes>");
        buf.dedent();
        buf.add_line("</BrowserRouter>");
        buf.dedent();
        buf.add_line(");");
        buf.dedent();
        buf.add_line("}");
    } else {
        buf.add_line("function App() {");
        buf.indent();
        buf.add_line("return (");
        buf.indent();
        buf.add_line("<div className=\"app\">");
        buf.indent();
        buf.add_line(&format!("<h1>{}</h1>", project.name));
        buf.dedent();
        buf.add_line("</div>");
        buf.dedent();
        buf.add_line(");");
        buf.dedent();
        buf.add_line("}");
    }
    buf.blank();
    buf.add_line("export default App;");
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
    buf.add_line("import react from \"@vitejs/plugin-react\";");
    buf.blank();
    buf.add_line("export default defineConfig({");
    buf.indent();
    buf.add_line("plugins: [react()],");
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

fn render_webpack_config(config: &GeneratorConfig) -> String {
    let entry = if config.typescript { "./src/main.tsx" } else { "./src/main.jsx" };
    let mut buf = CodeBuffer::new();
    buf.add_line("const path = require(\"path\");");
    buf.blank();
    buf.add_line("module.exports = {");
    buf.indent();
    buf.add_line(&format!("entry: \"{}\",", entry));
    buf.add_line("output: {");
    buf.indent();
    buf.add_line("path: path.resolve(__dirname, \"dist\"),");
    buf.add_line("filename: \"bundle.js\",");
    buf.dedent();
    buf.add_line("},");
    buf.add_line("resolve: {");
    buf.indent();
    buf.add_line("extensions: [\".tsx\", \".ts\", \".jsx\", \".js\"],");
    buf.dedent();
    buf.add_line("},");
    buf.dedent();
    buf.add_line("};");
    buf.into_output()
}

fn render_tsconfig() -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2020",
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "moduleResolution": "bundler",
            "jsx": "react-jsx",
            "strict": true,
            "skipLibCheck": true,
            "noEmit": true,
        },
        "include": ["src"],
    });
    serde_json::to_string_pretty(&config).unwrap_or_default() + "\n"
}

fn render_store(config: &GeneratorConfig) -> Option<String> {
    let mut buf = CodeBuffer::new();
    match config.state_management? {
        StateLibrary::Redux => {
            buf.add_line("import { configureStore } from \"@reduxjs/toolkit\";");
            buf.blank();
            buf.add_line("export const store = configureStore({");
            buf.indent();
            buf.add_line("reducer: {},");
            buf.dedent();
            buf.add_line("});");
        }
        StateLibrary::Zustand => {
            buf.add_line("import { create } from \"zustand\";");
            buf.blank();
            buf.add_line("export const useAppStore = create(() => ({}));");
        }
        // Vue stores have no place in a React project
        StateLibrary::Vuex | StateLibrary::Pinia => return None,
    }
    Some(buf.into_output())
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

pub(crate) fn render_gitignore() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("node_modules/");
    buf.add_line("dist/");
    buf.add_line(".env");
    buf.add_line("*.log");
    buf.into_output()
}
