use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall outcome of one campaign: `sent` means every recipient succeeded,
/// `partial` means a mix, `failed` means zero recipients succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Sent,
    Partial,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRecipient {
    pub email: String,
    pub error: String,
}

/// Immutable audit record of one send attempt. Written exactly once per
/// campaign and never updated; it outlives the transcript it references.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmailLog {
    pub id: String,
    pub transcript_id: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
    pub status: EmailStatus,
    pub sent_count: u32,
    pub failed_count: u32,
    pub failed_emails: Vec<FailedRecipient>,
}

impl EmailLog {
    pub fn new(
        transcript_id: String,
        recipients: Vec<String>,
        subject: String,
        status: EmailStatus,
        sent_count: u32,
        failed_count: u32,
        failed_emails: Vec<FailedRecipient>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            transcript_id,
            recipients,
            subject,
            sent_at: Utc::now(),
            status,
            sent_count,
            failed_count,
            failed_emails,
        }
    }
}
