//! Completion and embedding backends for Storyloom.
//!
//! Each remote provider sits behind its own feature flag. The local
//! [`HashedEmbedder`] is always available and needs no network or model files.
//!
//! # Available Backends
//!
//! - **Anthropic** (Claude completions) - Enable with `anthropic` feature
//! - **OpenAI-compatible embeddings** - Enable with `openai` feature
//! - **Hashed embeddings** (offline, deterministic) - Always available
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "anthropic")]
//! # {
//! use storyloom_models::AnthropicClient;
//! use storyloom_interface::CompletionDriver;
//! use storyloom_core::CompletionRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new(std::env::var("ANTHROPIC_KEY")?, "claude-3-7-sonnet-latest");
//! let text = client.complete(&CompletionRequest::new("Hello", 0.85)).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod hashed;

#[cfg(feature = "anthropic")]
mod anthropic;

#[cfg(feature = "openai")]
mod openai_embeddings;

pub use hashed::{DEFAULT_DIMENSIONS, HashedEmbedder};

#[cfg(feature = "anthropic")]
pub use anthropic::{
    ANTHROPIC_API_URL, AnthropicClient, AnthropicContentBlock, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};

#[cfg(feature = "openai")]
pub use openai_embeddings::OpenAIEmbeddingsClient;
