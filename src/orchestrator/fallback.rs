use crate::parser::DEFAULT_TASKS;

/// Deterministic specification used when no remote backend is available
///
/// Produces the five headed sections in fixed order with fixed bullets;
/// only the Problem section varies, echoing the trimmed prompt.
pub fn fallback_spec(prompt: &str) -> String {
    let mut text = String::new();

    text.push_str("## Problem\n");
    text.push_str(prompt.trim());
    text.push_str("\n\n");

    text.push_str("## User Stories\n");
    text.push_str("- As a user, I can view a homepage.\n");
    text.push_str("- As a user, I can see a counter and increment it.\n\n");

    text.push_str("## Acceptance Criteria\n");
    text.push_str("- Page loads with a title.\n");
    text.push_str("- Clicking the button increments the counter.\n\n");

    text.push_str("## Design\n");
    text.push_str("- Single-page app using vanilla JS.\n");
    text.push_str("- Minimal CSS.\n\n");

    text.push_str("## Tasks\n");
    for (i, task) in DEFAULT_TASKS.iter().enumerate() {
        text.push_str(&format!("{}) {}\n", i + 1, task));
    }

    text
}
