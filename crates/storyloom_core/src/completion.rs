//! Completion request type.

use serde::{Deserialize, Serialize};

/// One text-completion call: a single prompt plus sampling overrides.
///
/// Model choice is a deployment constant of the driver, not part of the request.
///
/// # Examples
///
/// ```
/// use storyloom_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .prompt("Write one sentence about rain.")
///     .temperature(Some(0.85))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Write one sentence about rain.");
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct CompletionRequest {
    /// Full prompt text sent as a single user turn
    #[builder(setter(into))]
    prompt: String,
    /// Sampling temperature, driver default when absent
    temperature: Option<f32>,
    /// Output token cap, driver default when absent
    max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new completion request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Shorthand for a prompt at a given temperature.
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: Some(temperature),
            max_tokens: None,
        }
    }
}
