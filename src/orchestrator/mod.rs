//! Text generation for specifications
//!
//! A `SpecGenerator` wraps at most one remote `TextBackend`, chosen once
//! from configuration. Remote failures never reach callers: generation
//! falls back to the deterministic template.

pub mod fallback;
pub mod generator;
pub mod prompts;

#[cfg(feature = "api-direct")]
pub mod anthropic;
#[cfg(feature = "api-direct")]
mod http;
#[cfg(feature = "api-direct")]
pub mod openai;

pub use fallback::fallback_spec;
pub use generator::SpecGenerator;

use async_trait::async_trait;
use std::time::Duration;

/// Errors from a remote text-generation backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

/// A remote text-generation service
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    /// Complete `prompt` under `system`, returning the generated text
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, BackendError>;
}
