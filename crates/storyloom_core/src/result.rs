//! Final result of a generation run.

use crate::{BeatEvaluation, CoherenceEvaluation, MetadataEvaluation};
use serde::{Deserialize, Serialize};

/// The stitched story and every evaluation collected while producing it.
///
/// Optional lists are `None` when their triggering condition was false and
/// serialize as `null`; they are never present-but-empty by coincidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// All passages joined by a blank line
    pub final_story: String,
    /// One entry per beat, in beat order
    pub beat_evaluations: Vec<BeatEvaluation>,
    /// One entry per adjacent pair, when coherence evaluation ran
    pub coherence_evaluations: Option<Vec<CoherenceEvaluation>>,
    /// One entry per beat, when metadata was supplied
    pub metadata_evaluations: Option<Vec<MetadataEvaluation>>,
}
