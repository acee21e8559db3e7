//! Core data types for Storyloom.
//!
//! This crate provides the request, configuration, and result types shared by
//! the generation pipeline, the model clients, and the HTTP layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod evaluation;
mod metadata;
mod request;
mod result;
mod strategy;

pub use completion::{CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError};
pub use config::{
    DEFAULT_METADATA_THRESHOLD, DEFAULT_TEMPERATURE, GenerationConfig, GenerationConfigBuilder,
    GenerationConfigBuilderError,
};
pub use evaluation::{BeatEvaluation, CoherenceEvaluation, MetadataEvaluation};
pub use metadata::{Character, StoryMetadata};
pub use request::GenerationRequest;
pub use result::GenerationResult;
pub use strategy::MemoryStrategy;
