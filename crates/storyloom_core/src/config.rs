//! Per-request generation configuration.

use crate::MemoryStrategy;
use serde::{Deserialize, Serialize};
use storyloom_error::{ValidationError, ValidationErrorKind};

/// Sampling temperature used when the request does not specify one.
pub const DEFAULT_TEMPERATURE: f32 = 0.85;

/// Embedding similarity at or above which metadata adherence passes without an LLM judgment.
pub const DEFAULT_METADATA_THRESHOLD: f64 = 0.7;

/// Knobs controlling one generation run.
///
/// # Examples
///
/// ```
/// use storyloom_core::{GenerationConfig, MemoryStrategy};
///
/// let config = GenerationConfig::builder()
///     .memory_strategy(MemoryStrategy::Summary)
///     .enable_coherence_eval(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.memory_strategy(), MemoryStrategy::Summary);
/// assert_eq!(*config.temperature(), 0.85);
/// assert!(config.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerationConfig {
    /// Context carry policy between beats
    memory_strategy: MemoryStrategy,
    /// Whether adjacent passages are judged for coherence after the loop
    enable_coherence_eval: bool,
    /// Sampling temperature for every completion call
    temperature: f32,
    /// Similarity that short-circuits the metadata judgment
    metadata_threshold: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            memory_strategy: MemoryStrategy::default(),
            enable_coherence_eval: false,
            temperature: DEFAULT_TEMPERATURE,
            metadata_threshold: DEFAULT_METADATA_THRESHOLD,
        }
    }
}

impl GenerationConfig {
    /// Creates a new generation config builder.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Checks that temperature is in [0, 2] and the threshold in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::new(ValidationErrorKind::OutOfRange {
                field: "temperature".to_string(),
                value: self.temperature.to_string(),
                range: "[0, 2]".to_string(),
            }));
        }
        if !(0.0..=1.0).contains(&self.metadata_threshold) {
            return Err(ValidationError::new(ValidationErrorKind::OutOfRange {
                field: "metadata_threshold".to_string(),
                value: self.metadata_threshold.to_string(),
                range: "[0, 1]".to_string(),
            }));
        }
        Ok(())
    }
}
