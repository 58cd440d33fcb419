use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use kiro_lite::models::{BackendProvider, KiroConfig, CONFIG_FILE};
use kiro_lite::{AppContext, Result};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kiro-lite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prompt → spec → tasks → scaffolded workspace", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ./kiro.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Workspace root, overrides the config file
    #[arg(short, long, global = true, env = "WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Text-generation backend, overrides the config file
    #[arg(long, global = true, value_enum)]
    provider: Option<BackendProvider>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a specification from a prompt and show its sections
    Spec(kiro_lite::cli::spec::SpecArgs),

    /// Extract the ordered task list from raw spec text
    Tasks(kiro_lite::cli::tasks::TasksArgs),

    /// Apply a task to the workspace
    Apply(kiro_lite::cli::apply::ApplyArgs),

    /// Workspace file operations
    #[command(subcommand)]
    File(kiro_lite::cli::file::FileCommands),

    /// Serve the JSON HTTP API
    Serve(kiro_lite::cli::server::ServeArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn load_config(cli: &Cli) -> Result<KiroConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut config = KiroConfig::load(&path)?;

    if let Some(workspace) = &cli.workspace {
        config.workspace = workspace.clone();
    }
    if let Some(provider) = cli.provider {
        config.backend.provider = provider;
    }
    Ok(config)
}

async fn run_async(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "kiro-lite", &mut io::stdout());
        return Ok(());
    }

    let ctx = AppContext::new(load_config(&cli)?)?;

    match cli.command {
        Commands::Spec(args) => kiro_lite::cli::spec::run(args, &ctx).await?,
        Commands::Tasks(args) => kiro_lite::cli::tasks::run(args, &ctx)?,
        Commands::Apply(args) => kiro_lite::cli::apply::run(args, &ctx)?,
        Commands::File(cmd) => kiro_lite::cli::file::run(cmd, &ctx)?,
        Commands::Serve(args) => kiro_lite::cli::server::run(args, ctx).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
