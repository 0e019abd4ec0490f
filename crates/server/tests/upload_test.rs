//! End-to-end tests for the campaign-archive upload endpoint.

mod common;

use common::{spawn_app, test_config};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

fn csv_form(contents: &str, file_name: &'static str) -> Form {
    Form::new().part(
        "file",
        Part::bytes(contents.as_bytes().to_vec()).file_name(file_name),
    )
}

#[tokio::test]
async fn csv_with_only_a_subject_column_parses_into_titled_items() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/uploads/file"))
        .multipart(csv_form(
            "Subject\nSpring sale launch\nSummer closeout\n",
            "campaigns.csv",
        ))
        .send()
        .await
        .expect("Failed to upload");
    assert!(response.status().is_success(), "{}", response.status());

    let body: Value = response.json().await.unwrap();
    let result = &body["result"];
    assert_eq!(result["item_count"].as_u64().unwrap(), 2);
    assert_eq!(result["file_kind"], "csv");
    let items = result["parsed_items"].as_array().unwrap();
    assert_eq!(items[0]["title"], "Spring sale launch");
    assert_eq!(items[0]["content"], "");
    assert_eq!(items[1]["title"], "Summer closeout");
    assert_eq!(items[1]["content"], "");
}

#[tokio::test]
async fn unsupported_extensions_are_rejected() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/uploads/file"))
        .multipart(csv_form("data", "campaigns.pdf"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Unsupported file type");
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let response = client
        .post(format!("{address}/uploads/file"))
        .multipart(Form::new().text("other", "value"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn upload_delete_removes_record_and_chunks() {
    let address = spawn_app(test_config()).await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{address}/uploads/file"))
        .multipart(csv_form(
            "Subject,Body\nWinter push,Snowy savings everywhere\n",
            "campaigns.csv",
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let upload_id = body["result"]["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{address}/uploads/{upload_id}"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = client
        .post(format!("{address}/search"))
        .json(&serde_json::json!({ "query": "snowy savings" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["result"].as_array().unwrap().is_empty());

    let response = client
        .get(format!("{address}/uploads/{upload_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
