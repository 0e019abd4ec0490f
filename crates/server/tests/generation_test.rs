//! End-to-end tests for the generation endpoint: the deterministic fallback
//! path and the model-backed path against a fake backend.

mod common;

use common::{spawn_app, test_config};
use reqwest::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn generation_without_credential_uses_the_deterministic_fallback() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    client
        .post(format!("{address}/guidelines"))
        .json(&json!({
            "title": "Voice",
            "content": "Always friendly",
            "category": "tone"
        }))
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("{address}/generate"))
        .json(&json!({
            "prompt": "Write a LinkedIn post about X",
            "content_type": "linkedin"
        }))
        .send()
        .await
        .expect("Failed to generate");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();

    let text = body["result"]["text"].as_str().unwrap();
    assert!(text.contains("[Request] Write a LinkedIn post about X"));
    assert!(text.contains("[Tone] Always friendly"));
    assert_eq!(body["result"]["source"], "fallback");
    assert_eq!(body["result"]["used_web"], false);

    // Audit payload: the composed user message carries the tone bullet.
    let messages = body["result"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    let user_message = messages[1]["content"].as_str().unwrap();
    assert!(user_message.contains("#### Tone\n- Always friendly"));
    assert!(user_message.contains("### User Request\nWrite a LinkedIn post about X"));
}

#[tokio::test]
async fn generation_with_a_backend_returns_the_model_text() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "On-brand copy from the model."
        })))
        .mount(&backend)
        .await;

    let mut config = test_config();
    config.generation.api_key = Some("test-key".to_string());
    config.generation.api_url = backend.uri();
    let address = spawn_app(config).await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{address}/generate"))
        .json(&json!({ "prompt": "Write a post about launch week" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["result"]["text"], "On-brand copy from the model.");
    assert_eq!(body["result"]["source"], "model");
}

#[tokio::test]
async fn backend_failure_degrades_to_the_fallback_never_an_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("also down"))
        .mount(&backend)
        .await;

    let mut config = test_config();
    config.generation.api_key = Some("test-key".to_string());
    config.generation.api_url = backend.uri();
    let address = spawn_app(config).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/generate"))
        .json(&json!({ "prompt": "Write a newsletter", "content_type": "newsletter" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["source"], "fallback");
    assert!(body["result"]["text"]
        .as_str()
        .unwrap()
        .contains("[Request] Write a newsletter"));
}

#[tokio::test]
async fn generation_without_a_prompt_is_rejected() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/generate"))
        .json(&json!({ "prompt": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn retrieved_upload_examples_reach_the_composed_prompt() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(
            "Subject,Body\nSpring sale,Big spring discounts on everything\n".as_bytes().to_vec(),
        )
        .file_name("campaigns.csv"),
    );
    let response = client
        .post(format!("{address}/uploads/file"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = client
        .post(format!("{address}/generate"))
        .json(&json!({ "prompt": "spring discounts" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let examples = body["result"]["upload_examples"].as_array().unwrap();
    assert_eq!(examples.len(), 1);
    assert!(examples[0].as_str().unwrap().contains("Spring sale"));
    let user_message = body["result"]["messages"][1]["content"].as_str().unwrap();
    assert!(user_message.contains("### Similar Past Campaigns"));
    assert!(user_message.contains("Spring sale"));
}
