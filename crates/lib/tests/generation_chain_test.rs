//! Tests for the generation fallback chain against a fake backend.

use brandrag::providers::ai::{AiProvider, OpenAiProvider};
use brandrag::PipelineError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer, model: &str) -> OpenAiProvider {
    OpenAiProvider::new(
        server.uri(),
        "test-key".to_string(),
        model.to_string(),
        "general-fallback".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn primary_success_wins_without_a_second_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "primary text"
        })))
        .expect(1)
        .mount(&server)
        .await;
    // No /chat/completions mock: a second attempt would 404 and fail the test.

    let provider = provider_for(&server, "gpt-4.1-mini");
    let text = provider.generate("system", "user").await.unwrap();
    assert_eq!(text, "primary text");
}

#[tokio::test]
async fn primary_failure_falls_back_to_the_chat_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "general-fallback" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "secondary text" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, "gpt-4.1-mini");
    let text = provider.generate("system", "user").await.unwrap();
    assert_eq!(text, "secondary text");
}

#[tokio::test]
async fn empty_primary_payload_is_a_typed_failure_and_triggers_the_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": [] })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "recovered" } }]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server, "gpt-4.1-mini");
    let text = provider.generate("system", "user").await.unwrap();
    assert_eq!(text, "recovered");
}

#[tokio::test]
async fn reasoning_models_are_never_retried_on_the_chat_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "must not be used" } }]
        })))
        .expect(0)
        .mount(&server)
        .await;

    let provider = provider_for(&server, "o3-mini");
    let result = provider.generate("system", "user").await;
    assert!(matches!(result, Err(PipelineError::AiApi(_))));
}

#[tokio::test]
async fn reasoning_models_attach_an_effort_hint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(body_partial_json(json!({
            "model": "o3-mini",
            "reasoning": { "effort": "medium" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "reasoned"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, "o3-mini");
    let text = provider.generate("system", "user").await.unwrap();
    assert_eq!(text, "reasoned");
}

#[tokio::test]
async fn non_reasoning_models_send_no_effort_hint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "plain"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, "gpt-4.1-mini");
    provider.generate("system", "user").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("reasoning").is_none());
}
