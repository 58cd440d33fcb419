//! Apply service - runs a task against the workspace

use crate::models::Manifest;
use crate::orchestrator::prompts::DEFAULT_TASK;
use crate::workspace::WorkspaceResult;
use crate::AppContext;
use serde::Serialize;

/// Outcome of applying a task, with the workspace listing afterwards
#[derive(Debug, Clone, Serialize)]
pub struct ApplyResult {
    pub ok: bool,
    pub result: Manifest,
    pub workspace: Vec<String>,
}

/// Apply a task; a missing description becomes the default task
///
/// Not safe to retry expecting the same manifest: the first call on an
/// empty workspace scaffolds, every later call appends a note.
pub fn apply_task(ctx: &AppContext, task: Option<&str>) -> WorkspaceResult<ApplyResult> {
    let task = task.unwrap_or(DEFAULT_TASK);
    let result = ctx.scaffold().apply(task)?;

    Ok(ApplyResult {
        ok: true,
        result,
        workspace: ctx.store.list(),
    })
}
