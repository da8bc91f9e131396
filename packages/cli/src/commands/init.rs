use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use blueprint_schema::Framework;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target framework (react, vue, angular, vanilla)
    #[arg(short, long, default_value = "react")]
    pub framework: String,

    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let framework: Framework = args
        .framework
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))?;

    println!(
        "{}",
        "📝 Initializing Blueprint project...".bright_blue().bold()
    );

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("button.component.json");
    if !example_file.exists() {
        let example_content = r#"{
  "name": "Button",
  "definition": {
    "type": "button",
    "props": { "className": "button" },
    "children": "Click me",
    "events": { "click": "console.log(\"clicked\")" }
  }
}
"#;
        fs::write(&example_file, example_content)?;
        println!("  {} Created button.component.json", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        framework,
        ..Config::default()
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/button.component.json", args.src_dir);
    println!("  2. Run: blueprint generate");
    println!("  3. Check output in dist/");

    Ok(())
}
