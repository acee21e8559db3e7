//! Request validation error types.

/// Reasons a generation request is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A numeric field fell outside its accepted range
    #[display("{} must be within {}, got {}", field, range, value)]
    OutOfRange {
        /// Field name as it appears in the request
        field: String,
        /// Offending value, rendered
        value: String,
        /// Accepted range, rendered
        range: String,
    },
    /// The request body could not be understood
    #[display("Malformed request: {}", _0)]
    Malformed(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storyloom_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::OutOfRange {
///     field: "temperature".into(),
///     value: "3".into(),
///     range: "[0, 2]".into(),
/// });
/// assert!(format!("{}", err).contains("temperature must be within [0, 2]"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
