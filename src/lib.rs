// Kiro-Lite - Spec-driven Scaffolding
// Turns a prompt into a structured spec and task list, then applies tasks to a sandboxed workspace

pub mod cli;
pub mod context;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod server;
pub mod services;
pub mod workspace;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use context::AppContext;
pub use models::{KiroConfig, Manifest, Specification};
pub use orchestrator::SpecGenerator;
pub use parser::{SpecParser, TaskExtractor};
pub use workspace::{ScaffoldEngine, WorkspaceError, WorkspaceStore};
