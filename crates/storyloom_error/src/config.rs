//! Configuration error types.

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_error::ConfigError;
    ///
    /// let err = ConfigError::new("[embeddings] provider must be \"hashed\" or \"openai\"");
    /// assert!(err.to_string().starts_with("Configuration Error: [embeddings] provider"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required environment variable (an API key, usually) is absent.
    ///
    /// ```
    /// use storyloom_error::ConfigError;
    ///
    /// let err = ConfigError::missing_env("OPENAI_API_KEY");
    /// assert_eq!(err.message, "OPENAI_API_KEY environment variable is not set");
    /// ```
    #[track_caller]
    pub fn missing_env(var: &str) -> Self {
        Self::new(format!("{var} environment variable is not set"))
    }
}
