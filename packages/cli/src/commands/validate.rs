use crate::config::Config;
use anyhow::{Context, Result};
use blueprint_schema::Framework;
use blueprint_validator::{validate_component, ValidateOptions, ValidationReport};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input definition file or directory to validate
    pub input: Option<PathBuf>,

    /// Target framework override (react, vue, angular, vanilla)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Show suggestions in addition to errors and warnings
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let framework = match &args.framework {
        Some(name) => name
            .parse::<Framework>()
            .map_err(|err| anyhow::anyhow!(err))?,
        None => config.framework,
    };
    let input = args.input.unwrap_or_else(|| config.get_src_dir(cwd));

    println!("🔍 {} Blueprint Validator", "Starting".green().bold());
    println!("   Framework: {}", framework);
    println!("   Input:     {}", input.display());
    println!();

    let files = collect_definition_files(&input)?;
    if files.is_empty() {
        anyhow::bail!("no definition files found under {}", input.display());
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;
    for path in &files {
        let report = validate_file(path, framework)?;
        total_errors += report.errors.len();
        total_warnings += report.warnings.len();

        if args.format == "json" {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if report.is_valid && report.warnings.is_empty() && !args.verbose {
            println!("{} {}", "✓".green(), path.display());
        } else {
            print_report(&report, path, args.verbose);
        }
    }

    println!();
    println!(
        "✨ {} Validation complete!",
        if total_errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files.len());
    if total_errors > 0 {
        println!("   {} {}", "Errors:".red(), total_errors);
    }
    if total_warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), total_warnings);
    }
    if total_errors == 0 && total_warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }

    if total_errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn validate_file(path: &Path, framework: Framework) -> Result<ValidationReport> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let raw: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))?;

    let name = raw
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let definition = raw.get("definition").cloned().unwrap_or_default();
    Ok(validate_component(
        name,
        &definition,
        framework,
        &ValidateOptions::default(),
    ))
}

pub(crate) fn print_report(report: &ValidationReport, path: &Path, verbose: bool) {
    println!("{}", path.display());
    let suggestions = report.suggestions.iter().filter(|_| verbose);
    for diagnostic in report.errors.iter().chain(&report.warnings).chain(suggestions) {
        let level_str = match diagnostic.level {
            blueprint_validator::DiagnosticLevel::Error => "error".red().bold(),
            blueprint_validator::DiagnosticLevel::Warning => "warning".yellow().bold(),
            blueprint_validator::DiagnosticLevel::Suggestion => "suggestion".blue().bold(),
        };
        println!(
            "  {} [{}] {}: {}",
            level_str, diagnostic.rule, diagnostic.field, diagnostic.message
        );
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();
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
        let is_definition = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                name.ends_with(".component.json") || name.ends_with(".page.json")
            });
        if path.is_file() && is_definition {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
