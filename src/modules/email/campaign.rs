use std::sync::Arc;

use mongodb::Database;
use thiserror::Error;

use crate::modules::email::crud::EmailLogCrud;
use crate::modules::email::model::{EmailLog, EmailStatus, FailedRecipient};
use crate::modules::transcript::model::Transcript;
use crate::services::mailer::Mailer;

const BODY_FOOTER: &str = "This summary was generated by Recaply";

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("No summary available to send")]
    NoSummaryAvailable,
}

#[derive(Debug)]
pub struct CampaignOutcome {
    pub message: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub sent: Vec<String>,
    pub failed: Vec<FailedRecipient>,
    pub status: EmailStatus,
}

/// The edited summary wins over the generated one.
pub fn resolve_summary(transcript: &Transcript) -> Option<&str> {
    transcript
        .edited_summary
        .as_deref()
        .or(transcript.generated_summary.as_deref())
}

pub fn compose_body(title: &str, summary: &str) -> String {
    format!(
        "Meeting Summary: {}\n\n{}\n\n---\n{}",
        title, summary, BODY_FOOTER
    )
}

pub fn classify(sent: usize, failed: usize) -> EmailStatus {
    if failed == 0 {
        EmailStatus::Sent
    } else if sent == 0 {
        EmailStatus::Failed
    } else {
        EmailStatus::Partial
    }
}

/// Attempts delivery to every recipient; one failure never aborts the rest.
/// Both returned lists keep the order the recipients were supplied in.
pub async fn deliver(
    mailer: &dyn Mailer,
    recipients: &[String],
    subject: &str,
    body: &str,
) -> (Vec<String>, Vec<FailedRecipient>) {
    let mut sent = Vec::new();
    let mut failed = Vec::new();

    for recipient in recipients {
        match mailer.send(recipient, subject, body).await {
            Ok(()) => sent.push(recipient.clone()),
            Err(e) => {
                tracing::warn!("email delivery to {} failed: {}", recipient, e);
                failed.push(FailedRecipient {
                    email: recipient.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    (sent, failed)
}

pub struct CampaignService {
    mailer: Arc<dyn Mailer>,
    logs: EmailLogCrud,
}

impl CampaignService {
    pub fn new(mailer: Arc<dyn Mailer>, db: &Database) -> Self {
        Self {
            mailer,
            logs: EmailLogCrud::new(db),
        }
    }

    pub async fn send(
        &self,
        transcript: &Transcript,
        recipients: &[String],
        subject: Option<String>,
    ) -> Result<CampaignOutcome, CampaignError> {
        let summary = resolve_summary(transcript).ok_or(CampaignError::NoSummaryAvailable)?;

        let subject =
            subject.unwrap_or_else(|| format!("Meeting Summary: {}", transcript.title));
        let body = compose_body(&transcript.title, summary);

        let (sent, failed) = deliver(self.mailer.as_ref(), recipients, &subject, &body).await;
        let status = classify(sent.len(), failed.len());

        let log = EmailLog::new(
            transcript.id.clone(),
            recipients.to_vec(),
            subject.clone(),
            status,
            sent.len() as u32,
            failed.len() as u32,
            failed.clone(),
        );
        // The audit trail is best-effort: a write failure must not fail the
        // campaign the caller just paid for.
        if let Err(e) = self.logs.create(log).await {
            tracing::warn!("failed to record email log: {}", e);
        }

        let message = match status {
            EmailStatus::Sent => {
                format!("Email sent successfully to {} recipients", sent.len())
            }
            EmailStatus::Partial => format!(
                "Email sent to {} recipients, failed for {}",
                sent.len(),
                failed.len()
            ),
            EmailStatus::Failed => {
                format!("Email delivery failed for all {} recipients", failed.len())
            }
        };

        Ok(CampaignOutcome {
            message,
            recipients: recipients.to_vec(),
            subject,
            sent,
            failed,
            status,
        })
    }
}
