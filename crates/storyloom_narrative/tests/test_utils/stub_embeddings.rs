//! Stub embedding backends with fixed geometry.

use async_trait::async_trait;
use storyloom_error::{ScoringError, ScoringErrorKind};
use storyloom_interface::Embeddings;

/// Every text maps to the same vector, so every pair scores 1.0.
pub struct ConstantEmbedder;

#[async_trait]
impl Embeddings for ConstantEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        Ok(inputs.iter().map(|_| vec![1.0, 0.0]).collect())
    }

    fn embedding_dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Consecutive inputs map to orthogonal axes, so every pair scores 0.0.
pub struct OrthogonalEmbedder;

#[async_trait]
impl Embeddings for OrthogonalEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        Ok(inputs
            .iter()
            .enumerate()
            .map(|(i, _)| if i % 2 == 0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
            .collect())
    }

    fn embedding_dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "orthogonal"
    }
}

/// Always fails.
pub struct FailingEmbedder;

#[async_trait]
impl Embeddings for FailingEmbedder {
    async fn embed(&self, _inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        Err(ScoringError::new(ScoringErrorKind::Embedding(
            "model not loaded".to_string(),
        )))
    }

    fn embedding_dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Returns one vector fewer than requested.
pub struct ShortEmbedder;

#[async_trait]
impl Embeddings for ShortEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        Ok(inputs.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }

    fn embedding_dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "short"
    }
}
