//! Semantic similarity between two spans of text.

use std::sync::Arc;
use storyloom_error::{ScoringError, ScoringErrorKind};
use storyloom_interface::Embeddings;
use tracing::{instrument, warn};

/// Cosine similarity over an injected embedding backend.
///
/// Built once at startup and shared; cloning shares the backend.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use storyloom_models::HashedEmbedder;
/// use storyloom_narrative::SimilarityScorer;
///
/// # #[tokio::main]
/// # async fn main() {
/// let scorer = SimilarityScorer::new(Arc::new(HashedEmbedder::default()));
/// let score = scorer.similarity_or_zero("a quiet harbor", "a quiet harbor").await;
/// assert!((score - 1.0).abs() < 1e-6);
/// # }
/// ```
#[derive(Clone)]
pub struct SimilarityScorer {
    embeddings: Arc<dyn Embeddings>,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("backend", &self.embeddings.name())
            .field("dimensions", &self.embeddings.embedding_dimensions())
            .finish()
    }
}

impl SimilarityScorer {
    /// Wrap an embedding backend.
    pub fn new(embeddings: Arc<dyn Embeddings>) -> Self {
        Self { embeddings }
    }

    /// Name of the underlying embedding backend.
    pub fn backend_name(&self) -> &str {
        self.embeddings.name()
    }

    /// Cosine similarity of the two texts' embeddings.
    ///
    /// Both texts are embedded in a single batch. Empty text is legal and
    /// scores 0.0 against anything when the backend maps it to a zero vector.
    #[instrument(skip_all, fields(backend = self.embeddings.name(), left_len = a.len(), right_len = b.len()))]
    pub async fn similarity(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        let inputs = [a.to_string(), b.to_string()];
        let vectors = self.embeddings.embed(&inputs).await?;
        match vectors.as_slice() {
            [left, right] => cosine_similarity(left, right),
            _ => Err(ScoringError::new(ScoringErrorKind::CountMismatch {
                expected: 2,
                actual: vectors.len(),
            })),
        }
    }

    /// Like [`similarity`](Self::similarity), but any failure scores 0.0.
    pub async fn similarity_or_zero(&self, a: &str, b: &str) -> f64 {
        match self.similarity(a, b).await {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "Similarity scoring failed, using 0.0");
                0.0
            }
        }
    }
}

/// Cosine similarity of two vectors; 0.0 when either has zero magnitude.
///
/// # Examples
///
/// ```
/// use storyloom_narrative::cosine_similarity;
///
/// let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(score, 0.0);
/// assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::new(ScoringErrorKind::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        }));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f64::EPSILON {
        Ok(0.0)
    } else {
        Ok(dot / denom)
    }
}

/// Number of whitespace-separated tokens.
///
/// ```
/// assert_eq!(storyloom_narrative::word_count("a b  c"), 3);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
