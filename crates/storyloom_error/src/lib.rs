//! Error types for Storyloom.
//!
//! This crate provides the error types used throughout the Storyloom workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Inside the generation loop most of these are recovered locally: a failed
//! completion becomes a sentinel passage, a failed score becomes `0.0`, a
//! malformed metadata block becomes a fixed "unavailable" string. Only
//! [`ValidationError`] and truly unexpected faults reach the caller.
//!
//! # Examples
//!
//! ```
//! use storyloom_error::{ConfigError, StoryloomResult};
//!
//! fn load_key() -> StoryloomResult<String> {
//!     Err(ConfigError::new("ANTHROPIC_KEY is not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod formatting;
mod scoring;
mod server;
mod validation;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{StoryloomError, StoryloomErrorKind, StoryloomResult};
pub use formatting::{FormattingError, FormattingErrorKind};
pub use scoring::{ScoringError, ScoringErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
