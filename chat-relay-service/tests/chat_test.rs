//! Integration tests for `POST /api/chat` validation and relaying.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn valid_message_is_trimmed_and_relayed() {
    let (app, provider) = TestApp::spawn_with_mock(true).await;

    let response = app.post_chat(json!({ "message": "  Hello  " })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "response": "Mock response for: Hello" }));
    assert_eq!(provider.prompts(), vec!["Hello".to_string()]);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let (app, provider) = TestApp::spawn_with_mock(true).await;

    let response = app.post_chat(json!({ "message": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Message cannot be empty" }));
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn whitespace_only_message_is_rejected() {
    let (app, provider) = TestApp::spawn_with_mock(true).await;

    for message in [" ", "\n\t  ", "   \r\n"] {
        let response = app.post_chat(json!({ "message": message })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Message cannot be empty");
    }
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn message_over_limit_is_rejected() {
    let (app, provider) = TestApp::spawn_with_mock(true).await;

    let response = app.post_chat(json!({ "message": "a".repeat(1001) })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Invalid request format or message too long" })
    );
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn raw_length_is_checked_before_trimming() {
    let (app, _) = TestApp::spawn_with_mock(true).await;

    let padded = format!("{}hi{}", " ".repeat(500), " ".repeat(500));
    assert_eq!(padded.chars().count(), 1002);

    let response = app.post_chat(json!({ "message": padded })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn boundary_lengths_are_accepted() {
    let (app, provider) = TestApp::spawn_with_mock(true).await;

    for message in ["x".to_string(), "y".repeat(1000), "日".repeat(1000)] {
        let response = app.post_chat(json!({ "message": message })).await;
        assert_eq!(response.status(), StatusCode::OK, "length {}", message.len());
    }
    assert_eq!(provider.prompts().len(), 3);
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let (app, _) = TestApp::spawn_with_mock(true).await;

    let response = app.post_chat(json!({ "text": "hello" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request format or message too long");
}

#[tokio::test]
async fn non_string_message_is_rejected() {
    let (app, _) = TestApp::spawn_with_mock(true).await;

    let response = app.post_chat(json!({ "message": 42 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (app, _) = TestApp::spawn_with_mock(true).await;

    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .header("content-type", "application/json")
        .body("{\"message\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request format or message too long");
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let (app, _) = TestApp::spawn_with_mock(true).await;

    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .body(r#"{"message":"hi"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn provider_failure_returns_generic_500() {
    let (app, provider) = TestApp::spawn_with_mock(false).await;

    let response = app.post_chat(json!({ "message": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to get AI response" }));
    assert_eq!(provider.prompts(), vec!["Hello".to_string()]);
}
