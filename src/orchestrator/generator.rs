use super::{fallback_spec, BackendError, TextBackend};
use crate::models::{BackendConfig, BackendProvider};
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Produces raw specification text from a prompt
///
/// Backed by one remote provider or by the deterministic template. Remote
/// calls are bounded by a timeout and never retried; any failure is logged
/// and answered with the template instead.
pub struct SpecGenerator {
    remote: Option<Box<dyn TextBackend>>,
    timeout: Duration,
}

impl SpecGenerator {
    /// Generator that always uses the deterministic template
    pub fn fallback() -> Self {
        Self {
            remote: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Generator backed by an explicit remote backend
    pub fn with_backend(backend: Box<dyn TextBackend>, timeout: Duration) -> Self {
        Self {
            remote: Some(backend),
            timeout,
        }
    }

    /// Select the backend once from configuration
    ///
    /// A provider that cannot be constructed (missing API key, feature not
    /// compiled in) degrades to the template.
    pub fn from_config(config: &BackendConfig) -> Self {
        match build_backend(config) {
            Ok(Some(backend)) => {
                info!(
                    provider = backend.name(),
                    model = config.model(),
                    timeout_secs = config.timeout_secs,
                    "using remote text-generation backend"
                );
                Self::with_backend(backend, Duration::from_secs(config.timeout_secs))
            }
            Ok(None) => {
                info!("no remote backend configured, using deterministic fallback");
                Self::fallback()
            }
            Err(e) => {
                warn!(
                    provider = config.provider.name(),
                    error = %e,
                    "remote backend unavailable, using deterministic fallback"
                );
                Self::fallback()
            }
        }
    }

    pub fn backend_name(&self) -> &str {
        self.remote
            .as_ref()
            .map(|backend| backend.name())
            .unwrap_or("fallback")
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Call the remote backend without falling back
    pub async fn try_remote(&self, prompt: &str, system: &str) -> Result<String, BackendError> {
        let backend = self
            .remote
            .as_ref()
            .ok_or_else(|| BackendError::Unavailable("no remote backend configured".to_string()))?;

        let text = tokio::time::timeout(self.timeout, backend.complete(prompt, system))
            .await
            .map_err(|_| BackendError::Timeout(self.timeout))??;

        if text.trim().is_empty() {
            return Err(BackendError::InvalidResponse("empty completion".to_string()));
        }
        Ok(text)
    }

    /// Generate specification text; never fails
    pub async fn generate(&self, prompt: &str, system: &str) -> String {
        if self.remote.is_none() {
            return fallback_spec(prompt);
        }

        match self.try_remote(prompt, system).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    backend = self.backend_name(),
                    error = %e,
                    "generation failed, using deterministic fallback"
                );
                fallback_spec(prompt)
            }
        }
    }
}

#[cfg(feature = "api-direct")]
fn build_backend(config: &BackendConfig) -> Result<Option<Box<dyn TextBackend>>, BackendError> {
    use super::anthropic::AnthropicBackend;
    use super::openai::OpenAiBackend;

    match config.provider {
        BackendProvider::None => Ok(None),
        BackendProvider::OpenAi => {
            let api_key = require_api_key(config)?;
            Ok(Some(Box::new(OpenAiBackend::new(config, api_key)?)))
        }
        BackendProvider::Anthropic => {
            let api_key = require_api_key(config)?;
            Ok(Some(Box::new(AnthropicBackend::new(config, api_key)?)))
        }
    }
}

#[cfg(not(feature = "api-direct"))]
fn build_backend(config: &BackendConfig) -> Result<Option<Box<dyn TextBackend>>, BackendError> {
    match config.provider {
        BackendProvider::None => Ok(None),
        other => Err(BackendError::Unavailable(format!(
            "{} support is not compiled in (enable the api-direct feature)",
            other.name()
        ))),
    }
}

#[cfg(feature = "api-direct")]
fn require_api_key(config: &BackendConfig) -> Result<String, BackendError> {
    config.api_key().ok_or_else(|| {
        BackendError::Unavailable(format!("{} is not set", config.api_key_env()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedBackend(&'static str);

    #[async_trait]
    impl TextBackend for CannedBackend {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl TextBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, BackendError> {
            Err(BackendError::Http("connection refused".to_string()))
        }
    }

    struct SlowBackend;

    #[async_trait]
    impl TextBackend for SlowBackend {
        fn name(&self) -> &str {
            "slow"
        }

        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, BackendError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn test_fallback_generator() {
        let generator = SpecGenerator::fallback();

        assert!(!generator.is_remote());
        assert_eq!(generator.backend_name(), "fallback");
        assert_eq!(
            generator.generate("Build a counter", "system").await,
            fallback_spec("Build a counter")
        );
        assert!(matches!(
            generator.try_remote("p", "s").await,
            Err(BackendError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_text_is_returned() {
        let generator = SpecGenerator::with_backend(
            Box::new(CannedBackend("## Problem\nremote\n")),
            Duration::from_secs(5),
        );

        assert_eq!(generator.backend_name(), "canned");
        assert_eq!(generator.generate("p", "s").await, "## Problem\nremote\n");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let generator = SpecGenerator::with_backend(Box::new(FailingBackend), Duration::from_secs(5));

        assert!(matches!(
            generator.try_remote("p", "s").await,
            Err(BackendError::Http(_))
        ));
        assert_eq!(generator.generate("Build it", "s").await, fallback_spec("Build it"));
    }

    #[tokio::test]
    async fn test_empty_completion_falls_back() {
        let generator =
            SpecGenerator::with_backend(Box::new(CannedBackend("  \n")), Duration::from_secs(5));

        assert!(matches!(
            generator.try_remote("p", "s").await,
            Err(BackendError::InvalidResponse(_))
        ));
        assert_eq!(generator.generate("x", "s").await, fallback_spec("x"));
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let generator =
            SpecGenerator::with_backend(Box::new(SlowBackend), Duration::from_millis(50));

        assert!(matches!(
            generator.try_remote("p", "s").await,
            Err(BackendError::Timeout(_))
        ));
        assert_eq!(generator.generate("slow", "s").await, fallback_spec("slow"));
    }

    #[test]
    fn test_from_config_defaults_to_fallback() {
        let generator = SpecGenerator::from_config(&BackendConfig::default());
        assert!(!generator.is_remote());
    }

    #[test]
    fn test_from_config_without_api_key_falls_back() {
        for provider in [BackendProvider::OpenAi, BackendProvider::Anthropic] {
            let config = BackendConfig {
                provider,
                api_key_env: Some("KIRO_LITE_TEST_KEY_THAT_IS_NEVER_SET".to_string()),
                ..Default::default()
            };
            let generator = SpecGenerator::from_config(&config);
            assert!(!generator.is_remote());
        }
    }
}
