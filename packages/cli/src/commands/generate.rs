use crate::commands::validate::print_report;
use crate::config::Config;
use anyhow::{Context, Result};
use blueprint_codegen::build_registry;
use blueprint_schema::{
    ComponentMetadata, Framework, GenerationResult, PageDefinition, ProjectDefinition,
};
use blueprint_validator::{validate_component, ValidateOptions};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input definition file or directory (defaults to the configured srcDir)
    pub input: Option<PathBuf>,

    /// Target framework override (react, vue, angular, vanilla)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Output directory override
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let framework = match &args.framework {
        Some(name) => name
            .parse::<Framework>()
            .map_err(|err| anyhow::anyhow!(err))?,
        None => config.framework,
    };
    let input = args.input.unwrap_or_else(|| config.get_src_dir(cwd));
    let out_dir = args.out_dir.unwrap_or_else(|| config.get_out_dir(cwd));
    tracing::debug!(%framework, input = %input.display(), "resolved generation target");

    println!("🚀 {} Blueprint", "Starting".green().bold());
    println!("   Framework: {}", framework);
    println!("   Input:     {}", input.display());
    println!("   Output:    {}", out_dir.display());
    println!();

    let registry = build_registry();
    let generator = registry.create(framework)?;

    let files = collect_definition_files(&input)?;
    if files.is_empty() {
        anyhow::bail!("no definition files found under {}", input.display());
    }

    // Components first so pages can resolve their imports
    let mut components = Vec::new();
    for path in &files {
        if file_kind(path) == Some(DefinitionKind::Component) {
            let metadata: ComponentMetadata = read_json(path)?;
            components.push(metadata);
        }
    }

    let mut files_written = 0;
    for path in &files {
        let kind = match file_kind(path) {
            Some(kind) => kind,
            None => continue,
        };

        let result = match kind {
            DefinitionKind::Component => {
                let raw: serde_json::Value = read_json(path)?;
                report_diagnostics(&raw, framework, path);
                let metadata: ComponentMetadata = read_json(path)?;
                println!("  {} {}", "Component".bright_blue(), metadata.name);
                generator.generate_component(&metadata, &config.generator)?
            }
            DefinitionKind::Page => {
                let raw: serde_json::Value = read_json(path)?;
                report_diagnostics(&raw, framework, path);
                let page: PageDefinition = read_json(path)?;
                println!("  {} {}", "Page".bright_blue(), page.name);
                generator.generate_page(&page, &components, &config.generator)?
            }
            DefinitionKind::Project => {
                let project: ProjectDefinition = read_json(path)?;
                println!("  {} {}", "Project".bright_blue(), project.name);
                generator.generate_project(&project, &config.generator)?
            }
        };

        files_written += write_result(&result, &out_dir, kind)?;
    }

    println!();
    println!("✨ {} Generation complete!", "Done".green().bold());
    println!("   Files written: {}", files_written);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionKind {
    Component,
    Page,
    Project,
}

fn file_kind(path: &Path) -> Option<DefinitionKind> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".component.json") {
        Some(DefinitionKind::Component)
    } else if name.ends_with(".page.json") {
        Some(DefinitionKind::Page)
    } else if name.ends_with(".project.json") {
        Some(DefinitionKind::Project)
    } else {
        None
    }
}

fn collect_definition_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("input path does not exist: {}", input.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && file_kind(path).is_some() {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}

fn report_diagnostics(raw: &serde_json::Value, framework: Framework, path: &Path) {
    let name = raw
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let definition = raw.get("definition").cloned().unwrap_or_default();
    let report = validate_component(name, &definition, framework, &ValidateOptions::default());
    if !report.errors.is_empty() || !report.warnings.is_empty() {
        print_report(&report, path, false);
    }
}

fn write_result(result: &GenerationResult, out_dir: &Path, kind: DefinitionKind) -> Result<usize> {
    let base = match kind {
        DefinitionKind::Component => out_dir.join("components"),
        _ => out_dir.to_path_buf(),
    };

    for (name, content) in &result.files {
        let target = base.join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)
            .with_context(|| format!("cannot write {}", target.display()))?;
        println!("    {} {}", "✓".green(), target.display());
    }
    Ok(result.files.len())
}
