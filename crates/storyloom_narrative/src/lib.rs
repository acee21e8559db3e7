//! Beat-to-prose generation pipeline for Storyloom.
//!
//! This crate turns an ordered list of story beats into continuous prose by
//! prompting an LLM once per beat, carrying context forward according to a
//! [`MemoryStrategy`](storyloom_core::MemoryStrategy), and scoring the result.
//!
//! # Components
//!
//! - **Similarity scoring**: cosine similarity over an injected embedding backend
//! - **Metadata formatting**: flattens genre, setting, cast, and style into one line
//! - **Prompts**: the generation, summary, coherence, and metadata-judgment templates
//! - **Orchestration**: [`StoryGenerator`] drives the per-beat loop and evaluations
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyloom_core::GenerationConfig;
//! use storyloom_models::{AnthropicClient, HashedEmbedder};
//! use storyloom_narrative::{SimilarityScorer, StoryGenerator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = Arc::new(AnthropicClient::new("api-key", "claude-3-7-sonnet-latest"));
//! let scorer = SimilarityScorer::new(Arc::new(HashedEmbedder::default()));
//! let generator = StoryGenerator::new(driver, scorer);
//!
//! let beats = vec!["A knight enters a tavern.".to_string()];
//! let result = generator
//!     .generate(&beats, &GenerationConfig::default(), None)
//!     .await?;
//! println!("{}", result.final_story);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod metadata;
mod prompts;
mod scoring;
mod verdict;

pub use generator::{
    COHERENCE_FAILURE_VERDICT, LENGTH_WINDOW, METADATA_FAILURE_VERDICT, PASSAGE_SENTINEL,
    StoryGenerator,
};
pub use metadata::{
    METADATA_UNAVAILABLE, characters_line, format_metadata, format_metadata_or_unavailable,
};
pub use prompts::{
    NOT_SPECIFIED, coherence_prompt, generation_prompt, metadata_judgment_prompt,
    summary_prompt,
};
pub use scoring::{SimilarityScorer, cosine_similarity, word_count};
pub use verdict::verdict_passes;
