//! HTTP routes.

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use std::future::Future;
use storyloom_core::{GenerationRequest, GenerationResult};
use storyloom_error::{
    ServerError, ServerErrorKind, StoryloomError, StoryloomErrorKind, ValidationError,
    ValidationErrorKind,
};
use storyloom_narrative::StoryGenerator;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

/// Shared state for every route.
#[derive(Debug, Clone)]
pub struct ApiState {
    generator: StoryGenerator,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(generator: StoryGenerator) -> Self {
        Self { generator }
    }
}

/// Creates the service router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/test", get(test_route))
        .route("/api/generate", post(generate_story))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests finish before this returns.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| {
            error!(error = %e, "HTTP server terminated");
            ServerError::new(ServerErrorKind::Serve(e.to_string()))
        })
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "OK"})))
}

/// Router smoke test.
async fn test_route() -> impl IntoResponse {
    Json(json!({"message": "Router is working!"}))
}

/// Generate a story from beats.
///
/// Every body rejection (bad syntax, wrong types, missing content type) is a 422.
#[instrument(skip_all)]
async fn generate_story(
    State(state): State<ApiState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ValidationError::new(ValidationErrorKind::Malformed(rejection.body_text()))
    })?;
    let config = request.config()?;
    let result = state
        .generator
        .generate(&request.beats, &config, request.metadata.as_ref())
        .await?;
    info!(
        beats = request.beats.len(),
        story_len = result.final_story.len(),
        "Story generated"
    );
    Ok(Json(result))
}

/// Maps errors onto `{"detail": ...}` bodies: 422 for bad requests, 500 otherwise.
#[derive(Debug)]
pub struct ApiError(StoryloomError);

impl<E> From<E> for ApiError
where
    E: Into<StoryloomError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0.kind() {
            StoryloomErrorKind::Validation(e) => {
                warn!(error = %e, "Rejected generation request");
                (StatusCode::UNPROCESSABLE_ENTITY, e.kind.to_string())
            }
            other => {
                error!(error = %other, "Generation request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
