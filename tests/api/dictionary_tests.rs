//! Dictionary API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use uuid::Uuid;

use dictionary_service::application::dto::DictionaryResponse;
use dictionary_service::shared::error::ErrorResponse;

use crate::common::TestApp;

async fn create(app: &TestApp, code: &str, description: &str) -> DictionaryResponse {
    let body = json!({ "code": code, "description": description });
    let response = app.post_json("/dictionaries", &body.to_string()).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    response.json()
}

#[tokio::test]
async fn test_create_returns_record_with_generated_id() {
    let app = TestApp::new();

    let created = create(&app, "EN", "English").await;

    assert!(!created.id.is_nil());
    assert_eq!(created.code, "EN");
    assert_eq!(created.description, "English");
}

#[tokio::test]
async fn test_create_then_get_returns_identical_record() {
    let app = TestApp::new();
    let created = create(&app, "EN", "English").await;

    let response = app.get(&format!("/dictionaries/{}", created.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<DictionaryResponse>(), created);
}

#[tokio::test]
async fn test_response_body_has_exactly_id_code_description() {
    let app = TestApp::new();
    let created = create(&app, "EN", "English").await;

    let response = app.get(&format!("/dictionaries/{}", created.id)).await;
    let body: serde_json::Value = response.json();

    assert_eq!(
        body,
        json!({
            "id": created.id.to_string(),
            "code": "EN",
            "description": "English"
        })
    );
}

#[test_case("EN", "English" ; "simple")]
#[test_case("", "" ; "empty strings")]
#[test_case("zh-Hant", "繁體中文" ; "unicode")]
#[test_case("quote\"d", "back\\slash and \"quotes\"" ; "json escapes")]
#[tokio::test]
async fn test_round_trip_preserves_pair(code: &str, description: &str) {
    let app = TestApp::new();
    let created = create(&app, code, description).await;

    let fetched: DictionaryResponse = app
        .get(&format!("/dictionaries/{}", created.id))
        .await
        .json();

    assert_eq!(fetched.code, code);
    assert_eq!(fetched.description, description);
}

#[tokio::test]
async fn test_list_contains_all_created_records() {
    let app = TestApp::new();
    let mut created = Vec::new();
    for (code, description) in [("EN", "English"), ("FR", "French"), ("DE", "German")] {
        created.push(create(&app, code, description).await);
    }

    let response = app.get("/dictionaries").await;

    assert_eq!(response.status, StatusCode::OK);
    let listed: Vec<DictionaryResponse> = response.json();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_array() {
    let app = TestApp::new();

    let response = app.get("/dictionaries").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_duplicate_codes_are_separate_records() {
    let app = TestApp::new();
    let first = create(&app, "EN", "English").await;
    let second = create(&app, "EN", "English").await;

    assert_ne!(first.id, second.id);
    let listed: Vec<DictionaryResponse> = app.get("/dictionaries").await.json();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_get_unknown_id_returns_not_found() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app.get(&format!("/dictionaries/{}", id)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json();
    assert_eq!(
        error.message,
        format!("Dictionary record not found with id: {}", id)
    );
}

#[tokio::test]
async fn test_delete_existing_returns_no_content_and_removes() {
    let app = TestApp::new();
    let created = create(&app, "EN", "English").await;
    let uri = format!("/dictionaries/{}", created.id);

    let response = app.delete(&uri).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let response = app.get(&uri).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_not_found_and_keeps_records() {
    let app = TestApp::new();
    let kept = create(&app, "EN", "English").await;
    let missing = Uuid::new_v4();

    let response = app.delete(&format!("/dictionaries/{}", missing)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json();
    assert!(error.message.contains(&missing.to_string()));

    let listed: Vec<DictionaryResponse> = app.get("/dictionaries").await.json();
    assert_eq!(listed, vec![kept]);
}

#[tokio::test]
async fn test_delete_twice_returns_not_found() {
    let app = TestApp::new();
    let created = create(&app, "EN", "English").await;
    let uri = format!("/dictionaries/{}", created.id);

    assert_eq!(app.delete(&uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.get("/dictionaries/not-a-uuid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json();
    assert_eq!(error.message, "Invalid dictionary ID: not-a-uuid");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/dictionaries", "{\"code\": \"EN\"}").await;

    assert!(response.status.is_client_error());
    let listed: Vec<DictionaryResponse> = app.get("/dictionaries").await.json();
    assert!(listed.is_empty());
}
