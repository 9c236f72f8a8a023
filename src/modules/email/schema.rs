use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::modules::email::model::{EmailStatus, FailedRecipient};

fn validate_recipients(recipients: &[String]) -> Result<(), ValidationError> {
    for recipient in recipients {
        if !recipient.validate_email() {
            return Err(ValidationError::new("email"));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(
        length(min = 1, message = "At least one recipient is required"),
        custom(function = validate_recipients, message = "Invalid email address")
    )]
    pub recipients: Vec<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailSendResponse {
    pub message: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub sent_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_emails: Vec<FailedRecipient>,
}

#[derive(Debug, Serialize)]
pub struct EmailLogResponse {
    pub id: String,
    pub transcript_id: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub sent_at: String,
    pub status: EmailStatus,
    pub sent_count: u32,
    pub failed_count: u32,
    pub failed_emails: Vec<FailedRecipient>,
}

#[derive(Debug, Serialize)]
pub struct EmailLogListResponse {
    pub email_logs: Vec<EmailLogResponse>,
}
