//! Tasks service - task list extraction from raw text

use crate::AppContext;

/// Extract the ordered task list; never empty
pub fn extract_tasks(ctx: &AppContext, raw: &str) -> Vec<String> {
    ctx.extractor.extract(raw)
}
