//! HTTP service for Storyloom.
//!
//! Exposes the generation pipeline over a small JSON API:
//!
//! - `POST /api/generate` - turn beats into a story
//! - `GET /api/test` - router smoke test
//! - `GET /health` - liveness
//!
//! The `storyloom` binary in this crate wires configuration, logging, and the
//! model backends together and serves the router.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod backends;
mod config;
mod telemetry;

pub use api::{ApiError, ApiState, create_router, serve};
pub use backends::{completion_driver, embeddings};
pub use config::{
    CompletionSettings, EmbeddingProvider, EmbeddingSettings, GenerationSettings, ServerSettings,
    StoryloomConfig,
};
pub use telemetry::{default_filter, init_tracing};
