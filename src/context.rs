use crate::models::KiroConfig;
use crate::orchestrator::SpecGenerator;
use crate::parser::{SpecParser, TaskExtractor};
use crate::workspace::{ScaffoldEngine, WorkspaceStore};
use crate::Result;
use anyhow::Context;
use tracing::info;

/// Everything one workspace needs, built once at startup and passed to
/// every service call
pub struct AppContext {
    pub config: KiroConfig,
    pub store: WorkspaceStore,
    pub generator: SpecGenerator,
    pub parser: SpecParser,
    pub extractor: TaskExtractor,
}

impl AppContext {
    /// Open the configured workspace and select the backend from config
    pub fn new(config: KiroConfig) -> Result<Self> {
        let generator = SpecGenerator::from_config(&config.backend);
        Self::with_generator(config, generator)
    }

    /// Build a context with an explicit generator
    pub fn with_generator(config: KiroConfig, generator: SpecGenerator) -> Result<Self> {
        let store = WorkspaceStore::open(&config.workspace).with_context(|| {
            format!("Failed to open workspace {}", config.workspace.display())
        })?;
        info!(
            workspace = %store.root().display(),
            backend = generator.backend_name(),
            "context initialised"
        );

        Ok(Self {
            config,
            store,
            generator,
            parser: SpecParser::new()?,
            extractor: TaskExtractor::new()?,
        })
    }

    pub fn scaffold(&self) -> ScaffoldEngine<'_> {
        ScaffoldEngine::new(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_opens_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let config = KiroConfig {
            workspace: temp_dir.path().join("ws"),
            ..Default::default()
        };

        let ctx = AppContext::new(config).unwrap();

        assert!(ctx.store.root().is_dir());
        assert_eq!(ctx.generator.backend_name(), "fallback");
    }

    #[test]
    fn test_contexts_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let a = AppContext::with_generator(
            KiroConfig {
                workspace: temp_dir.path().join("a"),
                ..Default::default()
            },
            SpecGenerator::fallback(),
        )
        .unwrap();
        let b = AppContext::with_generator(
            KiroConfig {
                workspace: temp_dir.path().join("b"),
                ..Default::default()
            },
            SpecGenerator::fallback(),
        )
        .unwrap();

        a.scaffold().apply("x").unwrap();

        assert_eq!(a.store.list().len(), 3);
        assert!(b.store.list().is_empty());
    }
}
