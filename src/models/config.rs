use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "kiro.toml";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Remote text-generation provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// Deterministic fallback template, no network access
    #[default]
    None,
    /// OpenAI-compatible chat completions
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
    /// Anthropic messages API
    Anthropic,
}

impl BackendProvider {
    pub fn name(&self) -> &'static str {
        match self {
            BackendProvider::None => "fallback",
            BackendProvider::OpenAi => "openai",
            BackendProvider::Anthropic => "anthropic",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            BackendProvider::None => "",
            BackendProvider::OpenAi => "gpt-4o-mini",
            BackendProvider::Anthropic => "claude-3-5-sonnet-20240620",
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            BackendProvider::None => "",
            BackendProvider::OpenAi => "OPENAI_API_KEY",
            BackendProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            BackendProvider::None => "",
            BackendProvider::OpenAi => "https://api.openai.com",
            BackendProvider::Anthropic => "https://api.anthropic.com",
        }
    }
}

/// Text-generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Provider to use (default: none, i.e. the deterministic fallback)
    #[serde(default)]
    pub provider: BackendProvider,

    /// Model name (default depends on provider)
    #[serde(default)]
    pub model: Option<String>,

    /// Environment variable holding the API key (default depends on provider)
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Base URL override, e.g. for a compatible proxy
    #[serde(default)]
    pub base_url: Option<String>,

    /// Upper bound on a single remote call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    2048
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            model: None,
            api_key_env: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl BackendConfig {
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        let var = self.api_key_env();
        if var.is_empty() {
            return None;
        }
        std::env::var(var).ok().filter(|key| !key.trim().is_empty())
    }
}

// =============================================================================
// Kiro Configuration
// =============================================================================

/// Kiro-Lite configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KiroConfig {
    /// Workspace root directory; created on startup if missing
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Text-generation backend
    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_workspace() -> PathBuf {
    PathBuf::from("./kiro_lite/workspaces/default")
}

fn default_port() -> u16 {
    5050
}

impl Default for KiroConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            port: default_port(),
            backend: BackendConfig::default(),
        }
    }
}

impl KiroConfig {
    /// Load config from a TOML file; a missing file yields the defaults
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: KiroConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", config_path.display(), e))?;
        Ok(config)
    }
}
