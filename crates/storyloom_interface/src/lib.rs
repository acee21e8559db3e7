//! Trait definitions for Storyloom.
//!
//! The generation pipeline talks to its two external collaborators, the
//! completion service and the embedding model, only through these traits so
//! that tests can substitute counting or failing doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionDriver, Embeddings};
