//! Similarity scoring error types.

/// Specific failure conditions while embedding or comparing text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScoringErrorKind {
    /// Embedding backend failed
    #[display("Embedding failed: {}", _0)]
    Embedding(String),
    /// Backend returned the wrong number of vectors
    #[display("Expected {} embeddings, got {}", expected, actual)]
    CountMismatch {
        /// Number of inputs sent
        expected: usize,
        /// Number of vectors returned
        actual: usize,
    },
    /// Vectors cannot be compared
    #[display("Embedding dimensions differ: {} vs {}", left, right)]
    DimensionMismatch {
        /// Dimension of the first vector
        left: usize,
        /// Dimension of the second vector
        right: usize,
    },
    /// Remote embedding endpoint returned a non-success status
    #[display("Embedding API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
}

/// Scoring error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Scoring Error: {} at line {} in {}", kind, line, file)]
pub struct ScoringError {
    /// The specific error condition
    pub kind: ScoringErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScoringError {
    /// Create a new ScoringError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScoringErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
