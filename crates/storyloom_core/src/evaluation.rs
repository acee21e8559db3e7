//! Per-beat and per-transition evaluation records.

use serde::{Deserialize, Serialize};

/// Length and beat-coverage scores for one generated passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatEvaluation {
    /// 1-based position of the beat
    pub beat_index: usize,
    /// Whitespace-separated token count of the passage
    pub word_count: usize,
    /// Whether the word count landed in the 100..=150 window
    pub length_ok: bool,
    /// Embedding similarity between beat text and passage
    pub beat_coverage_score: f64,
}

/// LLM judgment of the transition between two adjacent passages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceEvaluation {
    /// 1-based index of the later passage in the pair
    pub transition_index: usize,
    /// Verdict text as returned by the judge
    pub coherence_result: String,
    /// Whether the verdict reads as a pass
    pub passes: bool,
}

/// Adherence of one passage to the supplied story metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEvaluation {
    /// 1-based position of the beat
    pub beat_index: usize,
    /// Embedding similarity between formatted metadata and passage
    pub metadata_similarity: f64,
    /// Verdict text, either the fast-path note or the judge's answer
    pub metadata_evaluation: String,
    /// Whether the passage is judged consistent with the metadata
    pub passes: bool,
}
