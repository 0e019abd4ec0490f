//! End-to-end tests for the CRUD and search surface.

mod common;

use common::{spawn_app, test_config};
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .get(format!("{address}/health"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn guideline_create_indexes_chunks_visible_in_search() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/guidelines"))
        .json(&json!({
            "title": "Voice",
            "content": "Always friendly and helpful",
            "category": "tone"
        }))
        .send()
        .await
        .expect("Failed to create guideline");
    assert!(response.status().is_success(), "{}", response.status());
    let body: Value = response.json().await.unwrap();
    let guideline_id = body["result"]["id"].as_i64().unwrap();
    assert_eq!(body["result"]["category"], "tone");

    let response = client
        .post(format!("{address}/search"))
        .json(&json!({ "query": "friendly helpful voice" }))
        .send()
        .await
        .expect("Failed to search");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let results = body["result"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["source_type"], "guideline");
    assert_eq!(results[0]["source_id"].as_i64().unwrap(), guideline_id);
    assert!(results[0]["score"].as_f64().unwrap() > 0.0);
    assert!(results[0]["text"]
        .as_str()
        .unwrap()
        .contains("Always friendly"));
}

#[tokio::test]
async fn guideline_delete_removes_its_chunks() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{address}/guidelines"))
        .json(&json!({
            "title": "Rules",
            "content": "Never overpromise",
            "category": "rules"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let guideline_id = body["result"]["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{address}/guidelines/{guideline_id}"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = client
        .post(format!("{address}/search"))
        .json(&json!({ "query": "overpromise" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["result"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_guideline_category_is_rejected() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/guidelines"))
        .json(&json!({
            "title": "Bad",
            "content": "Content",
            "category": "vibes"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Invalid category"));
}

#[tokio::test]
async fn search_without_a_query_is_rejected() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/search"))
        .json(&json!({ "query": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn missing_scrapes_return_an_explanatory_detail() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{address}/scrape/linkedin"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["result"]["detail"], "No LinkedIn scrape found");
}
