//! Server CLI command

use crate::server::start_server;
use crate::{AppContext, Result};
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// HTTP server port (default: from config, 5050)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

pub async fn run(args: ServeArgs, ctx: AppContext) -> Result<()> {
    let port = args.port.unwrap_or(ctx.config.port);

    println!(
        "{}",
        format!("Kiro-Lite server starting on http://127.0.0.1:{}", port).cyan()
    );
    println!("  Workspace: {}", ctx.store.root().display());
    println!("  Backend: {}", ctx.generator.backend_name());

    start_server(Arc::new(ctx), port).await
}
