//! The per-beat generation loop.
//!
//! Beats are processed strictly in order because each prompt carries the
//! context produced by the previous beat. Everything that only reads an
//! already-generated passage (coverage scoring, metadata adherence, the
//! coherence pass) runs concurrently.

use crate::{
    SimilarityScorer, coherence_prompt, format_metadata_or_unavailable, generation_prompt,
    metadata_judgment_prompt, summary_prompt, verdict_passes, word_count,
};
use futures::future::join_all;
use std::ops::RangeInclusive;
use std::sync::Arc;
use storyloom_core::{
    BeatEvaluation, CoherenceEvaluation, CompletionRequest, GenerationConfig, GenerationResult,
    MemoryStrategy, MetadataEvaluation, StoryMetadata,
};
use storyloom_error::StoryloomResult;
use storyloom_interface::CompletionDriver;

/// Passage substituted when generation for a beat fails.
pub const PASSAGE_SENTINEL: &str = "Error generating prose for this beat.";

/// Verdict recorded when a coherence judgment fails.
pub const COHERENCE_FAILURE_VERDICT: &str = "Needs Improvement: Error during coherence evaluation.";

/// Verdict recorded when a metadata judgment fails.
pub const METADATA_FAILURE_VERDICT: &str = "Needs Improvement: Error during metadata evaluation.";

/// Word counts inside this window satisfy the ~125-word prompt target.
pub const LENGTH_WINDOW: RangeInclusive<usize> = 100..=150;

/// Turns beats into a story.
///
/// Holds no per-request state, so one generator can serve concurrent requests.
#[derive(Clone)]
pub struct StoryGenerator {
    driver: Arc<dyn CompletionDriver>,
    scorer: SimilarityScorer,
    context_char_limit: Option<usize>,
}

impl std::fmt::Debug for StoryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("scorer", &self.scorer)
            .field("context_char_limit", &self.context_char_limit)
            .finish()
    }
}

impl StoryGenerator {
    /// Create a generator over a completion driver and a similarity scorer.
    pub fn new(driver: Arc<dyn CompletionDriver>, scorer: SimilarityScorer) -> Self {
        Self {
            driver,
            scorer,
            context_char_limit: None,
        }
    }

    /// Cap the carried context to its trailing `limit` characters.
    ///
    /// `None` (the default) leaves the context unbounded.
    pub fn with_context_limit(mut self, limit: Option<usize>) -> Self {
        self.context_char_limit = limit;
        self
    }

    /// Generate prose for every beat and evaluate it.
    ///
    /// Only an invalid `config` fails the call. Per-beat faults degrade a
    /// single data point: a failed completion becomes [`PASSAGE_SENTINEL`],
    /// a failed score becomes 0.0, a failed judgment becomes a
    /// "Needs Improvement" verdict.
    #[tracing::instrument(
        skip(self, beats, config, metadata),
        fields(
            beat_count = beats.len(),
            memory_strategy = %config.memory_strategy(),
            coherence = config.enable_coherence_eval(),
            has_metadata = metadata.is_some(),
        )
    )]
    pub async fn generate(
        &self,
        beats: &[String],
        config: &GenerationConfig,
        metadata: Option<&StoryMetadata>,
    ) -> StoryloomResult<GenerationResult> {
        config.validate()?;

        let temperature = *config.temperature();
        let formatted_metadata = metadata.map(format_metadata_or_unavailable);

        let mut context = String::new();
        let mut passages: Vec<String> = Vec::with_capacity(beats.len());
        let mut beat_evaluations = Vec::with_capacity(beats.len());
        let mut metadata_evaluations = metadata.map(|_| Vec::with_capacity(beats.len()));

        for (i, beat) in beats.iter().enumerate() {
            let beat_index = i + 1;
            tracing::debug!(beat_index, context_len = context.len(), "Generating passage");

            let prompt = generation_prompt(beat, &context, metadata);
            let passage = match self
                .driver
                .complete(&CompletionRequest::new(prompt, temperature))
                .await
            {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(beat_index, error = %e, "Generation failed, using sentinel passage");
                    PASSAGE_SENTINEL.to_string()
                }
            };

            let coverage = self.scorer.similarity_or_zero(beat, &passage);
            let adherence = async {
                match formatted_metadata.as_deref() {
                    Some(formatted) => Some(
                        self.evaluate_metadata(beat_index, formatted, &passage, config)
                            .await,
                    ),
                    None => None,
                }
            };
            let (beat_coverage_score, metadata_evaluation) = tokio::join!(coverage, adherence);

            if let (Some(evaluations), Some(evaluation)) =
                (metadata_evaluations.as_mut(), metadata_evaluation)
            {
                evaluations.push(evaluation);
            }

            context = self
                .carry_context(context, &passage, *config.memory_strategy(), temperature)
                .await;

            let words = word_count(&passage);
            tracing::debug!(
                beat_index,
                word_count = words,
                beat_coverage_score,
                "Beat complete"
            );
            beat_evaluations.push(BeatEvaluation {
                beat_index,
                word_count: words,
                length_ok: LENGTH_WINDOW.contains(&words),
                beat_coverage_score,
            });
            passages.push(passage);
        }

        let coherence_evaluations = if *config.enable_coherence_eval() && passages.len() >= 2 {
            let judgments = passages
                .windows(2)
                .enumerate()
                .map(|(i, pair)| self.evaluate_coherence(i + 1, &pair[0], &pair[1], temperature));
            Some(join_all(judgments).await)
        } else {
            None
        };

        tracing::info!(
            beats = passages.len(),
            coherence_checked = coherence_evaluations.as_ref().map_or(0, Vec::len),
            "Story generation complete"
        );

        Ok(GenerationResult {
            final_story: passages.join("\n\n"),
            beat_evaluations,
            coherence_evaluations,
            metadata_evaluations,
        })
    }

    /// Next context for the given memory strategy.
    async fn carry_context(
        &self,
        mut context: String,
        passage: &str,
        strategy: MemoryStrategy,
        temperature: f32,
    ) -> String {
        let next = match strategy {
            MemoryStrategy::Full => {
                context.push_str("\n\n");
                context.push_str(passage);
                context
            }
            MemoryStrategy::Summary => {
                let combined = if context.is_empty() {
                    passage.to_string()
                } else {
                    format!("{context}\n\n{passage}")
                };
                let request = CompletionRequest::new(summary_prompt(&combined), temperature);
                match self.driver.complete(&request).await {
                    Ok(summary) => summary,
                    Err(e) => {
                        tracing::warn!(error = %e, "Summarization failed, keeping unsummarized context");
                        combined
                    }
                }
            }
            MemoryStrategy::None => String::new(),
        };

        match self.context_char_limit {
            Some(limit) => keep_tail(next, limit),
            None => next,
        }
    }

    /// Embedding fast path first; the LLM judge only runs below the threshold.
    async fn evaluate_metadata(
        &self,
        beat_index: usize,
        formatted_metadata: &str,
        passage: &str,
        config: &GenerationConfig,
    ) -> MetadataEvaluation {
        let metadata_similarity = self
            .scorer
            .similarity_or_zero(formatted_metadata, passage)
            .await;

        if metadata_similarity >= *config.metadata_threshold() {
            tracing::debug!(beat_index, metadata_similarity, "Metadata fast path");
            return MetadataEvaluation {
                beat_index,
                metadata_similarity,
                metadata_evaluation: format!("Good (similarity: {metadata_similarity:.2})"),
                passes: true,
            };
        }

        let request = CompletionRequest::new(
            metadata_judgment_prompt(formatted_metadata, passage),
            *config.temperature(),
        );
        let metadata_evaluation = match self.driver.complete(&request).await {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::warn!(beat_index, error = %e, "Metadata judgment failed");
                METADATA_FAILURE_VERDICT.to_string()
            }
        };

        MetadataEvaluation {
            beat_index,
            metadata_similarity,
            passes: verdict_passes(&metadata_evaluation),
            metadata_evaluation,
        }
    }

    async fn evaluate_coherence(
        &self,
        transition_index: usize,
        previous: &str,
        current: &str,
        temperature: f32,
    ) -> CoherenceEvaluation {
        let request = CompletionRequest::new(coherence_prompt(previous, current), temperature);
        let coherence_result = match self.driver.complete(&request).await {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::warn!(transition_index, error = %e, "Coherence judgment failed");
                COHERENCE_FAILURE_VERDICT.to_string()
            }
        };

        CoherenceEvaluation {
            transition_index,
            passes: verdict_passes(&coherence_result),
            coherence_result,
        }
    }
}

/// Keep the last `limit` characters of `text`.
fn keep_tail(text: String, limit: usize) -> String {
    let chars = text.chars().count();
    if chars <= limit {
        return text;
    }
    text.chars().skip(chars - limit).collect()
}
