//! Apply CLI command

use crate::services::apply_service;
use crate::{AppContext, Result};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ApplyArgs {
    /// Task description (default: "Scaffold basic app")
    pub task: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ApplyArgs, ctx: &AppContext) -> Result<()> {
    let outcome = apply_service::apply_task(ctx, args.task.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let label = format!("✓ {}", outcome.result.label());
    let label = if outcome.result.is_created() {
        label.green()
    } else {
        label.yellow()
    };
    for path in outcome.result.paths() {
        println!("{} {}", label, path);
    }

    println!("\n{}", "Workspace:".green().bold());
    for file in &outcome.workspace {
        println!("   • {}", file);
    }

    Ok(())
}
