use anyhow::Result;
use blueprint_codegen::build_registry;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct FrameworksArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn frameworks(args: FrameworksArgs) -> Result<()> {
    let registry = build_registry();
    let supported = registry.supported_frameworks();

    if args.format == "json" {
        let ids: Vec<&str> = supported.iter().map(|framework| framework.id()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    println!("{}", "Supported frameworks:".bright_blue().bold());
    for framework in supported {
        println!("  {} {}", "✓".green(), framework.id());
    }
    Ok(())
}
