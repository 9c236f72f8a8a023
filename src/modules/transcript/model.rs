use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_SUMMARY_PROMPT: &str =
    "Summarize this meeting transcript in a clear, structured format with key points and action items.";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transcript {
    pub id: String,
    pub title: String,
    pub original_text: String,
    pub custom_prompt: String,
    pub generated_summary: Option<String>,
    pub edited_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transcript {
    pub fn new(title: String, original_text: String, custom_prompt: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            original_text,
            custom_prompt: custom_prompt.unwrap_or_else(|| DEFAULT_SUMMARY_PROMPT.to_string()),
            generated_summary: None,
            edited_summary: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
