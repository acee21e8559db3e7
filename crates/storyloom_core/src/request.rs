//! Inbound generation request.

use crate::{
    DEFAULT_METADATA_THRESHOLD, DEFAULT_TEMPERATURE, GenerationConfig, GenerationConfigBuilder,
    MemoryStrategy, StoryMetadata,
};
use serde::{Deserialize, Serialize};
use storyloom_error::{ValidationError, ValidationErrorKind};

/// Request body accepted by the generate endpoint.
///
/// Every field except `beats` has a default, so the smallest valid body is
/// `{"beats": ["..."]}`.
///
/// # Examples
///
/// ```
/// use storyloom_core::{GenerationRequest, MemoryStrategy};
///
/// let request: GenerationRequest =
///     serde_json::from_str(r#"{"beats": ["A knight enters a tavern."]}"#).unwrap();
///
/// assert_eq!(request.memory_strategy, MemoryStrategy::Full);
/// assert!(!request.enable_coherence_eval);
/// assert!(request.metadata.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered plot instructions
    pub beats: Vec<String>,
    /// Context carry policy
    #[serde(default)]
    pub memory_strategy: MemoryStrategy,
    /// Judge adjacent passages after generation
    #[serde(default)]
    pub enable_coherence_eval: bool,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Optional genre/setting/cast/style constraints
    #[serde(default)]
    pub metadata: Option<StoryMetadata>,
    /// Fast-path similarity threshold for metadata adherence
    #[serde(default = "default_metadata_threshold")]
    pub metadata_threshold: f64,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_metadata_threshold() -> f64 {
    DEFAULT_METADATA_THRESHOLD
}

impl GenerationRequest {
    /// Build a request for the given beats with every other field defaulted.
    pub fn new(beats: Vec<String>) -> Self {
        Self {
            beats,
            memory_strategy: MemoryStrategy::default(),
            enable_coherence_eval: false,
            temperature: DEFAULT_TEMPERATURE,
            metadata: None,
            metadata_threshold: DEFAULT_METADATA_THRESHOLD,
        }
    }

    /// Extract the run configuration, validating ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the temperature or threshold is out of range.
    pub fn config(&self) -> Result<GenerationConfig, ValidationError> {
        let config = GenerationConfigBuilder::default()
            .memory_strategy(self.memory_strategy)
            .enable_coherence_eval(self.enable_coherence_eval)
            .temperature(self.temperature)
            .metadata_threshold(self.metadata_threshold)
            .build()
            .map_err(|e| ValidationError::new(ValidationErrorKind::Malformed(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}
