//! Spec CLI command

use crate::models::SpecSection;
use crate::services::spec_service;
use crate::{AppContext, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Args)]
pub struct SpecArgs {
    /// What to build (default: a tiny counter web app)
    pub prompt: Option<String>,

    /// Override the system prompt sent to the backend
    #[arg(long)]
    pub system: Option<String>,

    /// Print `{raw, spec}` as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw generated text instead of the parsed sections
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,
}

pub async fn run(args: SpecArgs, ctx: &AppContext) -> Result<()> {
    let progress = if ctx.generator.is_remote() && !args.json {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message(format!("Generating spec with {}...", ctx.generator.backend_name()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result =
        spec_service::generate_spec(ctx, args.prompt.as_deref(), args.system.as_deref()).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.raw {
        print!("{}", result.raw);
        return Ok(());
    }

    let spec = &result.spec;
    if spec.is_empty() {
        println!(
            "{}",
            "No recognised sections in the generated text (try --raw).".yellow()
        );
        return Ok(());
    }

    for section in SpecSection::all() {
        println!("\n{}", format!("## {}", section.name()).cyan().bold());
        match section {
            SpecSection::Problem => println!("{}", spec.problem.trim_end()),
            SpecSection::Design => println!("{}", spec.design.trim_end()),
            SpecSection::UserStories => print_items(&spec.user_stories, false),
            SpecSection::AcceptanceCriteria => print_items(&spec.acceptance_criteria, false),
            SpecSection::Tasks => print_items(&spec.tasks, true),
        }
    }

    Ok(())
}

fn print_items(items: &[String], numbered: bool) {
    if items.is_empty() {
        println!("{}", "(none)".dimmed());
        return;
    }
    for (i, item) in items.iter().enumerate() {
        if numbered {
            println!("   {}) {}", i + 1, item);
        } else {
            println!("   • {}", item);
        }
    }
}
