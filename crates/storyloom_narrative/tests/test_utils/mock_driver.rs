//! Mock completion driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyloom_core::CompletionRequest;
use storyloom_error::{CompletionError, CompletionErrorKind};
use storyloom_interface::CompletionDriver;

/// Which template a prompt was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Generation,
    Summary,
    Coherence,
    MetadataJudgment,
}

impl PromptKind {
    /// Classify a prompt by the fixed phrases each template carries.
    pub fn classify(prompt: &str) -> Self {
        if prompt.contains("You are a summarization expert") {
            Self::Summary
        } else if prompt.contains("Evaluate the coherence between") {
            Self::Coherence
        } else if prompt.contains("adheres to the given story metadata") {
            Self::MetadataJudgment
        } else {
            Self::Generation
        }
    }
}

/// A single scripted response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(CompletionErrorKind),
}

impl MockResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn unavailable() -> Self {
        Self::Error(CompletionErrorKind::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

/// Mock driver that answers each prompt kind from its own script.
///
/// Generation calls are answered from `passages` by call order (the last
/// entry repeats); when no passages are scripted, beat `n` gets
/// `"Passage {n} of the story."`.
pub struct MockDriver {
    passages: Vec<MockResponse>,
    summary: MockResponse,
    coherence: MockResponse,
    judgment: MockResponse,
    calls: Arc<Mutex<Vec<(PromptKind, String)>>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            passages: Vec::new(),
            summary: MockResponse::ok("A summary of events so far."),
            coherence: MockResponse::ok("Good. The transition flows naturally."),
            judgment: MockResponse::ok("Needs Improvement: the tone drifts."),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call of every kind fails.
    pub fn failing() -> Self {
        Self::new()
            .with_passages(vec![MockResponse::unavailable()])
            .with_summary(MockResponse::unavailable())
            .with_coherence(MockResponse::unavailable())
            .with_judgment(MockResponse::unavailable())
    }

    pub fn with_passages(mut self, passages: Vec<MockResponse>) -> Self {
        self.passages = passages;
        self
    }

    pub fn with_summary(mut self, response: MockResponse) -> Self {
        self.summary = response;
        self
    }

    pub fn with_coherence(mut self, response: MockResponse) -> Self {
        self.coherence = response;
        self
    }

    pub fn with_judgment(mut self, response: MockResponse) -> Self {
        self.judgment = response;
        self
    }

    /// Prompts received for one template, in call order.
    pub fn prompts(&self, kind: PromptKind) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }

    pub fn call_count(&self, kind: PromptKind) -> usize {
        self.prompts(kind).len()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, kind: PromptKind, prompt: &str) -> usize {
        let mut calls = self.calls.lock().unwrap();
        let previous = calls.iter().filter(|(k, _)| *k == kind).count();
        calls.push((kind, prompt.to_string()));
        previous
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let kind = PromptKind::classify(request.prompt());
        let index = self.record(kind, request.prompt());

        let response = match kind {
            PromptKind::Generation => match self.passages.len() {
                0 => MockResponse::Success(format!("Passage {} of the story.", index + 1)),
                n => self.passages[index.min(n - 1)].clone(),
            },
            PromptKind::Summary => self.summary.clone(),
            PromptKind::Coherence => self.coherence.clone(),
            PromptKind::MetadataJudgment => self.judgment.clone(),
        };

        match response {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(CompletionError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Extract the quoted previous-context block from a generation prompt.
pub fn context_of(prompt: &str) -> String {
    let start_marker = "Previous context:\n\"";
    let end_marker = "\"\n\nStory Metadata:";
    let start = prompt.find(start_marker).expect("generation prompt") + start_marker.len();
    let end = prompt.find(end_marker).expect("generation prompt");
    prompt[start..end].to_string()
}
