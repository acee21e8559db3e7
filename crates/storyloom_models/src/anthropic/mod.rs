//! Anthropic Messages API completion backend.

mod client;
mod dto;

pub use client::{ANTHROPIC_API_URL, AnthropicClient, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use dto::{
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
