//! Wire types for the Anthropic Messages API.

use serde::{Deserialize, Serialize};

/// A single conversation turn.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(pattern = "owned", setter(into))]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    role: String,
    /// Plain text content
    content: String,
}

impl AnthropicMessage {
    /// Creates a new message builder.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Request body for `POST /v1/messages`.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Output token cap
    max_tokens: u32,
    /// Conversation turns
    messages: Vec<AnthropicMessage>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new request builder.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One block of response content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Generated text
    Text {
        /// The text
        text: String,
    },
    /// Any block type this client does not consume (tool use, thinking, ...)
    #[serde(other)]
    Other,
}

/// Token accounting reported with each response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicUsage {
    /// Prompt tokens
    #[serde(default)]
    pub input_tokens: u32,
    /// Completion tokens
    #[serde(default)]
    pub output_tokens: u32,
}

/// Response body from `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponse {
    /// Message id
    id: String,
    /// Model that served the request
    model: String,
    /// Content blocks in order
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default)]
    usage: AnthropicUsage,
}

impl AnthropicResponse {
    /// Concatenate every text block; `None` when the response carries no text.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.as_str()),
                AnthropicContentBlock::Other => None,
            })
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}
