//! Metadata formatting error types.

/// Ways a metadata block can be structurally malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FormattingErrorKind {
    /// A character entry is missing its name or description
    #[display("Character {} has an empty {}", index, field)]
    MissingCharacterField {
        /// Zero-based position in the character list
        index: usize,
        /// Which field was blank
        field: String,
    },
}

/// Formatting error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Formatting Error: {} at line {} in {}", kind, line, file)]
pub struct FormattingError {
    /// The specific error condition
    pub kind: FormattingErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl FormattingError {
    /// Create a new FormattingError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FormattingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
