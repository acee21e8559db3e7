//! Deployment configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`storyloom.toml` shipped with the crate)
//! 2. An explicit `--config` file, or `./storyloom.toml` when present
//! 3. `STORYLOOM__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyloom_error::{ConfigError, StoryloomResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../storyloom.toml");

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on
    pub bind: String,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

/// Completion backend settings; constant for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Anthropic model identifier
    pub model: String,
    /// Output token cap per call
    pub max_tokens: u32,
    /// Per-attempt timeout
    pub timeout_secs: u64,
    /// Retries after the first attempt for transient failures
    pub max_retries: usize,
}

/// Which embedding backend scores similarity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmbeddingProvider {
    /// Offline feature hashing
    #[default]
    Hashed,
    /// OpenAI-compatible embeddings endpoint
    Openai,
}

/// Embedding backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    /// Backend selection
    pub provider: EmbeddingProvider,
    /// Vector size
    pub dimensions: usize,
    /// Endpoint root for the `openai` provider
    pub base_url: String,
    /// Model name for the `openai` provider
    pub model: String,
}

/// Generation loop settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Trailing characters of context kept between beats
    #[serde(default)]
    pub context_char_limit: Option<usize>,
}

/// Complete service configuration.
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:9000"
///
/// [embeddings]
/// provider = "openai"
/// base_url = "http://localhost:8080"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryloomConfig {
    /// Listener settings
    server: ServerSettings,
    /// LLM settings
    completion: CompletionSettings,
    /// Similarity backend settings
    embeddings: EmbeddingSettings,
    /// Loop settings
    #[serde(default)]
    generation: GenerationSettings,
}

impl StoryloomConfig {
    /// Load bundled defaults, then the given file (or `./storyloom.toml`), then the environment.
    ///
    /// An explicit path must exist; the implicit `./storyloom.toml` is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> StoryloomResult<Self> {
        debug!("Loading configuration with precedence: env > file > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("storyloom").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("STORYLOOM")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML string.
    pub fn from_toml(overrides: &str) -> StoryloomResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Bundled defaults only.
    pub fn bundled() -> StoryloomResult<Self> {
        Self::from_toml("")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryloomResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Replace the listen address (CLI override).
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }
}
