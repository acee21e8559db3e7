//! Completion (LLM call) error types.

/// Specific failure conditions when calling the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Request never produced an HTTP response
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Request exceeded the configured per-call budget
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// Vendor returned a non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// Response decoded but carried no text
    #[display("Response contained no text content")]
    EmptyResponse,
    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl CompletionErrorKind {
    /// Check if this failure is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            CompletionErrorKind::Http(_) | CompletionErrorKind::Timeout(_) => true,
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504 | 529)
            }
            _ => false,
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use storyloom_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text"));
/// assert!(!err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The specific error condition
    pub kind: CompletionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
