//! Prompt defaults for specification generation
//!
//! These are sent to remote backends verbatim; the fallback template only
//! echoes the user prompt.

/// Prompt used when a caller supplies none
pub const DEFAULT_PROMPT: &str = "Build a tiny web app with a counter.";

/// System prompt for specification generation
pub const SPEC_SYSTEM_PROMPT: &str = "You are a senior software engineer. Produce a concise but rigorous spec with sections: Problem, User Stories, Acceptance Criteria, Design, Tasks.";

/// Task description used when `apply` is called without one
pub const DEFAULT_TASK: &str = "Scaffold basic app";
