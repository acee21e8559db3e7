//! Construct the completion and embedding backends named by configuration.

use crate::{CompletionSettings, EmbeddingProvider, EmbeddingSettings};
use std::sync::Arc;
use std::time::Duration;
use storyloom_interface::{CompletionDriver, Embeddings};
use storyloom_models::{AnthropicClient, HashedEmbedder, OpenAIEmbeddingsClient};
use tracing::info;

/// Anthropic client with the configured model, token cap, timeout, and retry budget.
pub fn completion_driver(
    settings: &CompletionSettings,
    api_key: impl Into<String>,
) -> Arc<dyn CompletionDriver> {
    info!(model = %settings.model, "Using Anthropic completion backend");
    Arc::new(
        AnthropicClient::new(api_key, settings.model.as_str())
            .with_max_tokens(settings.max_tokens)
            .with_timeout(Duration::from_secs(settings.timeout_secs))
            .with_max_retries(settings.max_retries),
    )
}

/// Embedding backend for the similarity scorer.
///
/// `api_key` is only used by the `openai` provider.
pub fn embeddings(settings: &EmbeddingSettings, api_key: Option<String>) -> Arc<dyn Embeddings> {
    info!(
        provider = %settings.provider,
        dimensions = settings.dimensions,
        "Using embedding backend"
    );
    match settings.provider {
        EmbeddingProvider::Hashed => Arc::new(HashedEmbedder::new(settings.dimensions)),
        EmbeddingProvider::Openai => {
            let client = OpenAIEmbeddingsClient::new(
                settings.base_url.as_str(),
                settings.model.as_str(),
                settings.dimensions,
            );
            match api_key {
                Some(key) => Arc::new(client.with_api_key(key)),
                None => Arc::new(client),
            }
        }
    }
}
