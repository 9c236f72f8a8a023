use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTranscriptRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Transcript text cannot be empty"))]
    pub original_text: String,
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSummaryRequest {
    #[validate(length(min = 1, message = "Edited summary cannot be empty"))]
    pub edited_summary: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub title: String,
    pub original_text: String,
    pub custom_prompt: String,
    pub generated_summary: Option<String>,
    pub edited_summary: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptListResponse {
    pub transcripts: Vec<TranscriptResponse>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
