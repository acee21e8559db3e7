//! Trait definitions for completion and embedding backends.

use async_trait::async_trait;
use storyloom_core::CompletionRequest;
use storyloom_error::{CompletionError, ScoringError};

/// Text-completion backend.
///
/// Implementations must be safe for concurrent use: one driver instance is
/// shared by every in-flight generation request.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Produce completion text for a single prompt.
    async fn complete(&self, req: &CompletionRequest) -> Result<String, CompletionError>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-7-sonnet-latest").
    fn model_name(&self) -> &str;
}

/// Backend that maps text to dense vectors.
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// Generate embeddings for one or more text inputs.
    ///
    /// Returns one vector per input, in input order.
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError>;

    /// Dimensionality of the embedding vectors.
    fn embedding_dimensions(&self) -> usize;

    /// Human-readable backend name for logs.
    fn name(&self) -> &str;
}
