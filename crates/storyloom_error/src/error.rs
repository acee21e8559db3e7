//! Top-level error wrapper types.

use crate::{
    CompletionError, ConfigError, FormattingError, ScoringError, ServerError, ValidationError,
};

/// Every error condition a Storyloom operation can surface.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field");
/// let err: StoryloomError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryloomErrorKind {
    /// LLM completion failed
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Similarity scoring failed
    #[from(ScoringError)]
    Scoring(ScoringError),
    /// Story metadata could not be formatted
    #[from(FormattingError)]
    Formatting(FormattingError),
    /// Request failed boundary validation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Storyloom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomErrorKind, StoryloomResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> StoryloomResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::Malformed("bad body".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), StoryloomErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyloom Error: {}", _0)]
pub struct StoryloomError(Box<StoryloomErrorKind>);

impl StoryloomError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryloomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryloomErrorKind {
        &self.0
    }

    /// True when the caller sent a bad request rather than the service failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), StoryloomErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to StoryloomErrorKind
impl<T> From<T> for StoryloomError
where
    T: Into<StoryloomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyloom operations.
pub type StoryloomResult<T> = std::result::Result<T, StoryloomError>;
