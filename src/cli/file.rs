//! File CLI commands

use crate::services::file_service;
use crate::{AppContext, Result};
use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum FileCommands {
    /// List all workspace files
    List,

    /// Print a workspace file
    Read {
        /// Path relative to the workspace root
        path: String,
    },

    /// Create or overwrite a workspace file
    Write {
        /// Path relative to the workspace root
        path: String,

        /// Literal content
        #[arg(long, conflicts_with = "from")]
        content: Option<String>,

        /// Copy content from a local file
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Delete a workspace file or directory
    Delete {
        /// Path relative to the workspace root
        path: String,
    },
}

pub fn run(cmd: FileCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        FileCommands::List => {
            let files = file_service::list_files(ctx);
            if files.is_empty() {
                println!("{}", "Workspace is empty.".yellow());
            }
            for file in files {
                println!("{}", file);
            }
        }

        FileCommands::Read { path } => {
            let file = file_service::read_file(ctx, &path)?;
            print!("{}", file.content);
        }

        FileCommands::Write {
            path,
            content,
            from,
        } => {
            let content = match (content, from) {
                (Some(content), _) => content,
                (None, Some(source)) => std::fs::read_to_string(&source)
                    .with_context(|| format!("Failed to read {}", source.display()))?,
                (None, None) => String::new(),
            };
            file_service::write_file(ctx, &path, &content)?;
            println!("{} {}", "✓ Wrote".green(), path);
        }

        FileCommands::Delete { path } => {
            file_service::delete_file(ctx, &path)?;
            println!("{} {}", "✓ Deleted".green(), path);
        }
    }
    Ok(())
}
