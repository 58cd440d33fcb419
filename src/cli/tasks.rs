//! Tasks CLI command

use crate::services::tasks_service;
use crate::{AppContext, Result};
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct TasksArgs {
    /// File with raw spec text (reads stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the task list as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TasksArgs, ctx: &AppContext) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let tasks = tasks_service::extract_tasks(ctx, &raw);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "tasks": tasks }))?);
    } else {
        for (i, task) in tasks.iter().enumerate() {
            println!("{}) {}", i + 1, task);
        }
    }

    Ok(())
}
