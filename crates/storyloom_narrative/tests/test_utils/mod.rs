//! Test utilities for Storyloom narrative tests.
//!
//! This module provides mock drivers and stub embedding backends.

pub mod mock_driver;
pub mod stub_embeddings;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse, PromptKind, context_of};
#[allow(unused_imports)]
pub use stub_embeddings::{ConstantEmbedder, FailingEmbedder, OrthogonalEmbedder, ShortEmbedder};
