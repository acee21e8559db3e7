use crate::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use reqwest::Client;
use std::time::Duration;
use storyloom_core::CompletionRequest;
use storyloom_error::{CompletionError, CompletionErrorKind};
use storyloom_interface::CompletionDriver;
use tokio_retry2::{
    Retry, RetryError,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::{debug, error, instrument, warn};

/// Messages endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used when deployment config does not name one.
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-latest";

/// Output cap per call; roughly a 125-word passage with headroom.
pub const DEFAULT_MAX_TOKENS: u32 = 225;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_RETRIES: usize = 2;
const MAX_TEMPERATURE: f32 = 1.0;

/// Anthropic API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
    max_tokens: u32,
    timeout: Duration,
    max_retries: usize,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-7-sonnet-latest")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!(model = %model, "Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
            api_url: ANTHROPIC_API_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Default output token cap for requests that do not set one.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of retries after the first attempt for transient failures.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Point the client at a different endpoint (proxies, test servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sends a request to the Anthropic API once.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, CompletionError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                if e.is_timeout() {
                    CompletionError::new(CompletionErrorKind::Timeout(e.to_string()))
                } else {
                    CompletionError::new(CompletionErrorKind::Http(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            CompletionError::new(CompletionErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            response_id = %anthropic_response.id(),
            output_tokens = anthropic_response.usage().output_tokens,
            "Received response from Anthropic"
        );
        Ok(anthropic_response)
    }

    /// Sends a request, retrying transient failures with jittered backoff.
    async fn generate_with_retry(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, CompletionError> {
        let strategy = ExponentialBackoff::from_millis(500)
            .factor(2)
            .max_delay(Duration::from_secs(8))
            .map(jitter)
            .take(self.max_retries);

        let client = self;
        Retry::spawn(strategy, move || async move {
            match client.generate_anthropic(request).await {
                Ok(response) => Ok(response),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Anthropic call failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await
    }

    /// Converts a completion request to an Anthropic API request.
    fn convert_request(&self, request: &CompletionRequest) -> Result<AnthropicRequest, CompletionError> {
        let message = AnthropicMessage::builder()
            .role("user")
            .content(request.prompt().as_str())
            .build()
            .map_err(|e| CompletionError::new(CompletionErrorKind::Builder(e.to_string())))?;

        let mut builder = AnthropicRequest::builder()
            .model(self.model.as_str())
            .max_tokens(request.max_tokens().unwrap_or(self.max_tokens))
            .messages(vec![message]);

        if let Some(temp) = request.temperature() {
            let temp = if *temp > MAX_TEMPERATURE {
                warn!(requested = *temp, "Temperature above Anthropic maximum, clamping to 1.0");
                MAX_TEMPERATURE
            } else {
                temp.max(0.0)
            };
            builder = builder.temperature(temp);
        }

        builder
            .build()
            .map_err(|e| CompletionError::new(CompletionErrorKind::Builder(e.to_string())))
    }
}

#[async_trait::async_trait]
impl CompletionDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(prompt_len = request.prompt().len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let anthropic_request = self.convert_request(request)?;
        let response = self.generate_with_retry(&anthropic_request).await?;
        response
            .text()
            .ok_or_else(|| CompletionError::new(CompletionErrorKind::EmptyResponse))
    }
}
