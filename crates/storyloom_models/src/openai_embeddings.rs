//! Client for OpenAI-compatible `/v1/embeddings` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyloom_error::{ScoringError, ScoringErrorKind};
use storyloom_interface::Embeddings;
use tracing::{debug, error, instrument};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

/// Embedding backend for any server speaking the OpenAI embeddings protocol.
#[derive(Debug, Clone)]
pub struct OpenAIEmbeddingsClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    dimensions: usize,
    timeout: Duration,
}

impl OpenAIEmbeddingsClient {
    /// Create a client for `{base_url}/v1/embeddings` using `model`.
    ///
    /// `dimensions` is informational; the server decides the real vector size.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, dimensions: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: None,
            dimensions,
            timeout: Duration::from_secs(30),
        }
    }

    /// Send a bearer token with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Embeddings for OpenAIEmbeddingsClient {
    #[instrument(skip(self, inputs), fields(model = %self.model, count = inputs.len()))]
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        let url = format!("{}/v1/embeddings", self.base_url);
        debug!("Requesting embeddings from {}", url);

        let mut req = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&EmbeddingRequest {
                model: &self.model,
                input: inputs,
            });
        if let Some(api_key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(|e| {
            error!("Embedding request failed: {}", e);
            ScoringError::new(ScoringErrorKind::Embedding(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Embedding server returned error");
            return Err(ScoringError::new(ScoringErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let mut parsed: EmbeddingResponse = response.json().await.map_err(|e| {
            ScoringError::new(ScoringErrorKind::Embedding(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if parsed.data.len() != inputs.len() {
            return Err(ScoringError::new(ScoringErrorKind::CountMismatch {
                expected: inputs.len(),
                actual: parsed.data.len(),
            }));
        }
        parsed.data.sort_by_key(|d| d.index);
        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    fn embedding_dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
