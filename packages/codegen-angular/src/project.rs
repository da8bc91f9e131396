use blueprint_common::{CodeBuffer, GenerateError};
use blueprint_schema::{GenerationResult, GeneratorConfig, ProjectDefinition};
use serde_json::{json, Map};

pub(crate) fn component_dependencies(config: &GeneratorConfig) -> Vec<String> {
    let mut deps = vec![
        "@angular/core".to_string(),
        "@angular/common".to_string(),
        "@angular/platform-browser".to_string(),
    ];
    if config.routing {
        deps.push("@angular/router".to_string());
    }
    deps.push("rxjs".to_string());
    deps.push("zone.js".to_string());
    deps
}

fn npm_version(package: &str) -> &'static str {
    match package {
        "@angular/core"
        | "@angular/common"
        | "@angular/platform-browser"
        | "@angular/router"
        | "@angular/compiler"
        | "@angular/compiler-cli"
        | "@angular/cli" => "^17.3.0",
        "@angular-devkit/build-angular" => "^17.3.0",
        "rxjs" => "~7.8.0",
        "zone.js" => "~0.14.0",
        "typescript" => "~5.4.0",
        "jasmine-core" => "~5.1.0",
        "karma" => "~6.4.0",
        "karma-chrome-launcher" => "~3.2.0",
        "karma-jasmine" => "~5.1.0",
        _ => "latest",
    }
}

/// Generate whole-project scaffolding for an Angular app. The Angular CLI
/// owns the build pipeline, so the build_tool setting is not consulted here.
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
    result.add_file("angular.json", render_angular_json(project));
    result.add_file("src/index.html", render_index_html(project));
    result.add_file("src/main.ts", render_main());
    result.add_file("src/styles.css", render_global_styles());
    result.add_file("src/app/app.component.ts", render_app_component(project));
    result.add_file("src/app/app.config.ts", render_app_config(config));
    if config.routing {
        result.add_file("src/app/app.routes.ts", render_app_routes());
    }
    result.add_file("tsconfig.json", render_tsconfig());
    result.add_file("README.md", render_readme(project));
    result.add_file(".gitignore", render_gitignore());

    for dependency in component_dependencies(config) {
        result.add_dependency(dependency);
    }
    result.set_metadata("framework", json!("angular"));
    result.set_metadata("project", json!(project.name));
    Ok(result)
}

fn render_package_json(project: &ProjectDefinition, config: &GeneratorConfig) -> String {
    let mut scripts = Map::new();
    scripts.insert("start".to_string(), json!("ng serve"));
    scripts.insert("build".to_string(), json!("ng build"));
    if config.testing {
        scripts.insert("test".to_string(), json!("ng test"));
    }

    let mut dependencies = Map::new();
    for package in component_dependencies(config) {
        dependencies.insert(package.clone(), json!(npm_version(&package)));
    }
    dependencies.insert(
        "@angular/compiler".to_string(),
        json!(npm_version("@angular/compiler")),
    );

    let mut dev_dependencies = Map::new();
    for package in [
        "@angular/cli",
        "@angular/compiler-cli",
        "@angular-devkit/build-angular",
        "typescript",
    ] {
        dev_dependencies.insert(package.to_string(), json!(npm_version(package)));
    }
    if config.testing {
        for package in ["jasmine-core", "karma", "karma-chrome-launcher", "karma-jasmine"] {
            dev_dependencies.insert(package.to_string(), json!(npm_version(package)));
        }
    }

    let manifest = json!({
        "name": project.name,
        "description": project.description,
        "private": true,
        "version": "0.1.0",
        "scripts": scripts,
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default() + "\n"
}

fn render_angular_json(project: &ProjectDefinition) -> String {
    let manifest = json!({
        "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
        "version": 1,
        "newProjectRoot": "projects",
        "projects": {
            (project.name.as_str()): {
                "projectType": "application",
                "root": "",
                "sourceRoot": "src",
                "prefix": "app",
                "architect": {
                    "build": {
                        "builder": "@angular-devkit/build-angular:application",
                        "options": {
                            "outputPath": "dist",
                            "index": "src/index.html",
                            "browser": "src/main.ts",
                            "tsConfig": "tsconfig.json",
                            "styles": ["src/styles.css"],
                        },
                    },
                    "serve": {
                        "builder": "@angular-devkit/build-angular:dev-server",
                    },
                },
            },
        },
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default() + "\n"
}

fn render_index_html(project: &ProjectDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("<!DOCTYPE html>");
    buf.add_line("<html lang=\"en\">");
    buf.indent();
    buf.add_line("<head>");
    buf.indent();
    buf.add_line("<meta charset=\"UTF-8\">");
    buf.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    buf.add_line(&format!("<title>{}</title>", project.name));
    buf.add_line("<base href=\"/\">");
    buf.dedent();
    buf.add_line("</head>");
    buf.add_line("<body>");
    buf.indent();
    buf.add_line("<app-root></app-root>");
    buf.dedent();
    buf.add_line("</body>");
    buf.dedent();
    buf.add_line("</html>");
    buf.into_output()
}

fn render_main() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { bootstrapApplication } from \"@angular/platform-browser\";");
    buf.add_line("import { AppComponent } from \"./app/app.component\";");
    buf.add_line("import { appConfig } from \"./app/app.config\";");
    buf.blank();
    buf.add_line("bootstrapApplication(AppComponent, appConfig).catch((err) => console.error(err));");
    buf.into_output()
}

fn render_app_component(project: &ProjectDefinition) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { Component } from \"@angular/core\";");
    buf.add_line("import { RouterOutlet } from \"@angular/router\";");
    buf.blank();
    buf.add_line("@Component({");
    buf.indent();
    buf.add_line("selector: \"app-root\",");
    buf.add_line("standalone: true,");
    buf.add_line("imports: [RouterOutlet],");
    buf.add_line("template: `<router-outlet />`,");
    buf.dedent();
    buf.add_line("})");
    buf.add_line("export class AppComponent {");
    buf.indent();
    buf.add_line(&format!("title = \"{}\";", project.name));
    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

fn render_app_config(config: &GeneratorConfig) -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { ApplicationConfig } from \"@angular/core\";");
    if config.routing {
        buf.add_line("import { provideRouter } from \"@angular/router\";");
        buf.add_line("import { routes } from \"./app.routes\";");
    }
    buf.blank();
    buf.add_line("export const appConfig: ApplicationConfig = {");
    buf.indent();
    if config.routing {
        buf.add_line("providers: [provideRouter(routes)],");
    } else {
        buf.add_line("providers: [],");
    }
    buf.dedent();
    buf.add_line("};");
    buf.into_output()
}

fn render_app_routes() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("import { Routes } from \"@angular/router\";");
    buf.blank();
    buf.add_line("export const routes: Routes = [];");
    buf.into_output()
}

fn render_global_styles() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("html, body {");
    buf.indent();
    buf.add_line("margin: 0;");
    buf.add_line("font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;");
    buf.dedent();
    buf.add_line("}");
    buf.into_output()
}

fn render_tsconfig() -> String {
    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ES2022",
            "moduleResolution": "bundler",
            "strict": true,
            "experimentalDecorators": true,
            "skipLibCheck": true,
            "outDir": "./dist/out-tsc",
        },
        "include": ["src/**/*.ts"],
    });
    serde_json::to_string_pretty(&tsconfig).unwrap_or_default() + "\n"
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
    buf.add_line("npm start");
    buf.add_line("```");
    buf.into_output()
}

fn render_gitignore() -> String {
    let mut buf = CodeBuffer::new();
    buf.add_line("node_modules/");
    buf.add_line("dist/");
    buf.add_line(".angular/");
    buf.add_line(".env");
    buf.add_line("*.log");
    buf.into_output()
}
