#![cfg(feature = "anthropic")]

mod test_utils;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use storyloom_core::CompletionRequest;
use storyloom_error::CompletionErrorKind;
use storyloom_interface::CompletionDriver;
use storyloom_models::AnthropicClient;
use test_utils::spawn_server;

/// What the fake Messages endpoint received, one entry per attempt.
#[derive(Default)]
struct Recorded {
    bodies: Vec<Value>,
    headers: Vec<HeaderMap>,
}

/// Start a fake Messages endpoint answering every attempt with `status`.
///
/// Successful replies carry `content` as the content block list.
async fn fake_messages_api(status: StatusCode, content: Value) -> (String, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let sink = recorded.clone();

    let router = Router::new().route(
        "/v1/messages",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            let content = content.clone();
            async move {
                {
                    let mut recorded = sink.lock().unwrap();
                    recorded.bodies.push(body);
                    recorded.headers.push(headers);
                }
                if status.is_success() {
                    Json(json!({
                        "id": "msg_test",
                        "type": "message",
                        "role": "assistant",
                        "model": "claude-3-7-sonnet-latest",
                        "content": content,
                        "stop_reason": "end_turn",
                        "usage": {"input_tokens": 10, "output_tokens": 5}
                    }))
                    .into_response()
                } else {
                    (status, "upstream says no").into_response()
                }
            }
        }),
    );

    let base = spawn_server(router).await;
    (format!("{base}/v1/messages"), recorded)
}

fn text_content(text: &str) -> Value {
    json!([{"type": "text", "text": text}])
}

fn client(url: &str, max_retries: usize) -> AnthropicClient {
    AnthropicClient::new("sk-test", "claude-3-7-sonnet-latest")
        .with_api_url(url)
        .with_max_retries(max_retries)
}

async fn sent_temperature(requested: f32) -> Option<f64> {
    let (url, recorded) = fake_messages_api(StatusCode::OK, text_content("Rain.")).await;
    client(&url, 0)
        .complete(&CompletionRequest::new("Describe rain.", requested))
        .await
        .unwrap();
    let recorded = recorded.lock().unwrap();
    recorded.bodies[0]["temperature"].as_f64()
}

#[tokio::test]
async fn test_successful_completion_sends_expected_request() {
    let (url, recorded) = fake_messages_api(StatusCode::OK, text_content("Once upon a time.")).await;

    let text = client(&url, 0)
        .complete(&CompletionRequest::new("Begin the tale.", 0.85))
        .await
        .unwrap();

    assert_eq!(text, "Once upon a time.");

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.bodies.len(), 1);
    let body = &recorded.bodies[0];
    assert_eq!(body["model"], "claude-3-7-sonnet-latest");
    assert_eq!(body["max_tokens"], 225);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Begin the tale.");
    assert!(body.get("system").is_none());

    let headers = &recorded.headers[0];
    assert_eq!(headers["x-api-key"], "sk-test");
    assert_eq!(headers["anthropic-version"], "2023-06-01");
}

#[tokio::test]
async fn test_temperature_within_range_is_forwarded() {
    assert_eq!(sent_temperature(0.5).await, Some(0.5));
}

#[tokio::test]
async fn test_temperature_above_one_is_clamped() {
    assert_eq!(sent_temperature(1.7).await, Some(1.0));
}

#[tokio::test]
async fn test_negative_temperature_is_floored() {
    assert_eq!(sent_temperature(-0.5).await, Some(0.0));
}

#[tokio::test]
async fn test_request_max_tokens_overrides_client_default() {
    let (url, recorded) = fake_messages_api(StatusCode::OK, text_content("Short.")).await;
    let request = CompletionRequest::builder()
        .prompt("Be brief.")
        .max_tokens(Some(40))
        .build()
        .unwrap();

    client(&url, 0).with_max_tokens(300).complete(&request).await.unwrap();

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.bodies[0]["max_tokens"], 40);
    assert!(recorded.bodies[0].get("temperature").is_none());
}

#[tokio::test]
async fn test_transient_status_is_retried_up_to_budget() {
    let (url, recorded) =
        fake_messages_api(StatusCode::SERVICE_UNAVAILABLE, text_content("unused")).await;

    let err = client(&url, 2)
        .complete(&CompletionRequest::new("Hello.", 0.5))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CompletionErrorKind::Api { status: 503, .. }));
    assert_eq!(recorded.lock().unwrap().bodies.len(), 3);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let (url, recorded) = fake_messages_api(StatusCode::BAD_REQUEST, text_content("unused")).await;

    let err = client(&url, 2)
        .complete(&CompletionRequest::new("Hello.", 0.5))
        .await
        .unwrap_err();

    match err.kind {
        CompletionErrorKind::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "upstream says no");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(recorded.lock().unwrap().bodies.len(), 1);
}

#[tokio::test]
async fn test_response_without_text_is_empty_response() {
    let (url, recorded) = fake_messages_api(StatusCode::OK, json!([])).await;

    let err = client(&url, 2)
        .complete(&CompletionRequest::new("Hello.", 0.5))
        .await
        .unwrap_err();

    assert_eq!(err.kind, CompletionErrorKind::EmptyResponse);
    assert_eq!(recorded.lock().unwrap().bodies.len(), 1);
}
