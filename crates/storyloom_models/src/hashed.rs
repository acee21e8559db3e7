//! Offline feature-hashing embedder.
//!
//! Produces deterministic dense vectors by hashing lowercase terms into a
//! fixed number of signed buckets with sublinear term-frequency weights.
//! Less semantically rich than a neural model, but it needs no network, no
//! model files, and scores identical text at exactly 1.0.

use async_trait::async_trait;
use std::collections::BTreeMap;
use storyloom_error::ScoringError;
use storyloom_interface::Embeddings;

/// Bucket count used when none is configured.
pub const DEFAULT_DIMENSIONS: usize = 512;

/// Deterministic bag-of-words embedder.
///
/// # Examples
///
/// ```
/// use storyloom_models::HashedEmbedder;
///
/// let embedder = HashedEmbedder::new(64);
/// let a = embedder.embed_text("The knight enters the tavern");
/// let b = embedder.embed_text("the KNIGHT enters the tavern!");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedEmbedder {
    dimensions: usize,
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashedEmbedder {
    /// Create an embedder with the given number of buckets (at least 1).
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a, 64-bit.
    fn hash_term(term: &str) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric() && c != '\'')
            .map(|s| s.trim_matches('\''))
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Embed a single text. Empty or punctuation-only text yields the zero vector.
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for term in Self::tokenize(text) {
            *counts.entry(term).or_insert(0) += 1;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            let h = Self::hash_term(term);
            let bucket = (h % self.dimensions as u64) as usize;
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign * (1.0 + (*count as f32).ln());
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl Embeddings for HashedEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        Ok(inputs.iter().map(|text| self.embed_text(text)).collect())
    }

    fn embedding_dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed"
    }
}
