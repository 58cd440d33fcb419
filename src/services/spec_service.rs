//! Spec service - generation and parsing of specifications

use crate::models::Specification;
use crate::orchestrator::prompts::{DEFAULT_PROMPT, SPEC_SYSTEM_PROMPT};
use crate::AppContext;
use serde::Serialize;
use tracing::debug;

/// Raw generated text together with its parsed form
#[derive(Debug, Clone, Serialize)]
pub struct SpecResult {
    pub raw: String,
    pub spec: Specification,
}

/// Generate specification text and parse it
///
/// A missing prompt or system prompt is replaced by its default; a supplied
/// value, even an empty one, is used as given.
pub async fn generate_spec(ctx: &AppContext, prompt: Option<&str>, system: Option<&str>) -> SpecResult {
    let prompt = prompt.unwrap_or(DEFAULT_PROMPT);
    let system = system.unwrap_or(SPEC_SYSTEM_PROMPT);

    let raw = ctx.generator.generate(prompt, system).await;
    let spec = ctx.parser.parse(&raw);
    debug!(
        backend = ctx.generator.backend_name(),
        tasks = spec.tasks.len(),
        "generated specification"
    );

    SpecResult { raw, spec }
}

pub fn parse_spec(ctx: &AppContext, raw: &str) -> Specification {
    ctx.parser.parse(raw)
}
