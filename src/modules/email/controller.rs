use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::modules::email::{
    campaign::{CampaignOutcome, CampaignService},
    crud::EmailLogCrud,
    model::EmailLog,
    schema::{EmailLogListResponse, EmailLogResponse, EmailRequest, EmailSendResponse},
};
use crate::modules::transcript::{crud::TranscriptCrud, schema::MessageResponse};
use crate::AppState;

fn to_send_response(outcome: CampaignOutcome) -> EmailSendResponse {
    EmailSendResponse {
        message: outcome.message,
        recipients: outcome.recipients,
        subject: outcome.subject,
        sent_emails: outcome.sent,
        failed_emails: outcome.failed,
    }
}

fn to_log_response(log: &EmailLog) -> EmailLogResponse {
    EmailLogResponse {
        id: log.id.clone(),
        transcript_id: log.transcript_id.clone(),
        recipients: log.recipients.clone(),
        subject: log.subject.clone(),
        sent_at: log.sent_at.to_rfc3339(),
        status: log.status,
        sent_count: log.sent_count,
        failed_count: log.failed_count,
        failed_emails: log.failed_emails.clone(),
    }
}

pub async fn send_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EmailRequest>,
) -> Result<Json<EmailSendResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let crud = TranscriptCrud::new(&state.db);

    let transcript = match crud.find_by_id(&id).await {
        Ok(Some(t)) => t,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(MessageResponse { message: "Transcript not found".to_string() }),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse { message: e.to_string() }),
            ))
        }
    };

    let campaign = CampaignService::new(state.mailer.clone(), &state.db);

    match campaign
        .send(&transcript, &payload.recipients, payload.subject)
        .await
    {
        Ok(outcome) => Ok(Json(to_send_response(outcome))),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        )),
    }
}

/// Audit-trail lookup. Deliberately no existence check on the transcript:
/// email logs outlive transcript deletion.
pub async fn list_email_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmailLogListResponse>, (StatusCode, Json<MessageResponse>)> {
    let crud = EmailLogCrud::new(&state.db);

    let logs = crud.find_by_transcript(&id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )
    })?;

    Ok(Json(EmailLogListResponse {
        email_logs: logs.iter().map(to_log_response).collect(),
    }))
}
