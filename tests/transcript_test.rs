use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use recaply::config::{self, mail::MailConfig};
use recaply::services::{llm::SummarizerClient, mailer::SmtpMailer};
use recaply::{modules, AppState};
use serde_json::json;

async fn setup_test_server() -> TestServer {
    dotenvy::dotenv().ok();

    let db = config::database::connect().await;
    let llm = SummarizerClient::new().unwrap();
    let mailer = SmtpMailer::new(MailConfig::from_env());

    let state = AppState {
        db,
        llm,
        mailer: Arc::new(mailer),
    };

    let app = Router::new()
        .merge(modules::transcript::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_transcript_success() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/transcripts")
        .json(&json!({
            "title": "Weekly sync",
            "original_text": "Alice: the release is on track. Bob: QA starts Monday."
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["title"], "Weekly sync");
    assert_eq!(
        body["original_text"],
        "Alice: the release is on track. Bob: QA starts Monday."
    );
    assert!(body["generated_summary"].is_null());
    assert!(body["edited_summary"].is_null());
    assert!(body["updated_at"].is_null());
}

#[tokio::test]
async fn test_create_transcript_uses_default_prompt() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/transcripts")
        .json(&json!({
            "title": "No prompt given",
            "original_text": "Short meeting."
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["custom_prompt"],
        "Summarize this meeting transcript in a clear, structured format with key points and action items."
    );
}

#[tokio::test]
async fn test_create_transcript_empty_title_fails() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/transcripts")
        .json(&json!({
            "title": "",
            "original_text": "Some text"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_transcript_empty_text_fails() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/transcripts")
        .json(&json!({
            "title": "A title",
            "original_text": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_transcript_not_found() {
    let server = setup_test_server().await;

    let response = server
        .get("/api/transcripts/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_get_transcript() {
    let server = setup_test_server().await;

    let create_response = server
        .post("/api/transcripts")
        .json(&json!({
            "title": "Round trip",
            "original_text": "Full transcript text",
            "custom_prompt": "Summarize in bullet points"
        }))
        .await;

    create_response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = create_response.json();
    let id = created["id"].as_str().unwrap();

    let get_response = server.get(&format!("/api/transcripts/{}", id)).await;

    get_response.assert_status(StatusCode::OK);
    let fetched: serde_json::Value = get_response.json();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["original_text"], "Full transcript text");
    assert_eq!(fetched["custom_prompt"], "Summarize in bullet points");
    assert!(fetched["generated_summary"].is_null());
    assert!(fetched["edited_summary"].is_null());
}

#[tokio::test]
async fn test_list_transcripts_newest_first() {
    let server = setup_test_server().await;

    let first: serde_json::Value = server
        .post("/api/transcripts")
        .json(&json!({ "title": "Older", "original_text": "first" }))
        .await
        .json();
    let second: serde_json::Value = server
        .post("/api/transcripts")
        .json(&json!({ "title": "Newer", "original_text": "second" }))
        .await
        .json();

    let response = server.get("/api/transcripts").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let transcripts = body["transcripts"].as_array().unwrap();

    let position = |id: &serde_json::Value| {
        transcripts
            .iter()
            .position(|t| t["id"] == *id)
            .expect("created transcript missing from list")
    };

    assert!(position(&second["id"]) < position(&first["id"]));
}

#[tokio::test]
async fn test_update_edited_summary() {
    let server = setup_test_server().await;

    let created: serde_json::Value = server
        .post("/api/transcripts")
        .json(&json!({ "title": "Editable", "original_text": "text" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let update_response = server
        .put(&format!("/api/transcripts/{}/summary", id))
        .json(&json!({ "edited_summary": "Hand-written summary" }))
        .await;

    update_response.assert_status(StatusCode::OK);
    let body: serde_json::Value = update_response.json();
    assert_eq!(body["message"], "Summary updated successfully");

    let fetched: serde_json::Value = server.get(&format!("/api/transcripts/{}", id)).await.json();
    assert_eq!(fetched["edited_summary"], "Hand-written summary");
    // The generated summary is untouched by an edit.
    assert!(fetched["generated_summary"].is_null());
    assert!(fetched["updated_at"].is_string());
    assert!(fetched["updated_at"].as_str().unwrap() > fetched["created_at"].as_str().unwrap());
}

#[tokio::test]
async fn test_update_summary_not_found() {
    let server = setup_test_server().await;

    let response = server
        .put("/api/transcripts/00000000-0000-0000-0000-000000000000/summary")
        .json(&json!({ "edited_summary": "anything" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_summary_empty_fails() {
    let server = setup_test_server().await;

    let created: serde_json::Value = server
        .post("/api/transcripts")
        .json(&json!({ "title": "Editable", "original_text": "text" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/transcripts/{}/summary", id))
        .json(&json!({ "edited_summary": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_transcript() {
    let server = setup_test_server().await;

    let created: serde_json::Value = server
        .post("/api/transcripts")
        .json(&json!({ "title": "To be deleted", "original_text": "text" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let delete_response = server.delete(&format!("/api/transcripts/{}", id)).await;
    delete_response.assert_status(StatusCode::OK);

    let get_response = server.get(&format!("/api/transcripts/{}", id)).await;
    get_response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_transcript_not_found() {
    let server = setup_test_server().await;

    let response = server
        .delete("/api/transcripts/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
