use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::modules::transcript::{
    crud::TranscriptCrud,
    model::Transcript,
    schema::{
        CreateTranscriptRequest, GenerateSummaryResponse, MessageResponse, TranscriptListResponse,
        TranscriptResponse, UpdateSummaryRequest,
    },
};
use crate::AppState;

fn to_response(t: &Transcript) -> TranscriptResponse {
    TranscriptResponse {
        id: t.id.clone(),
        title: t.title.clone(),
        original_text: t.original_text.clone(),
        custom_prompt: t.custom_prompt.clone(),
        generated_summary: t.generated_summary.clone(),
        edited_summary: t.edited_summary.clone(),
        created_at: t.created_at.to_rfc3339(),
        updated_at: t.updated_at.map(|u| u.to_rfc3339()),
    }
}

pub async fn create_transcript(
    State(state): State<AppState>,
    Json(payload): Json<CreateTranscriptRequest>,
) -> Result<(StatusCode, Json<TranscriptResponse>), (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let crud = TranscriptCrud::new(&state.db);
    let transcript = Transcript::new(payload.title, payload.original_text, payload.custom_prompt);

    match crud.create(transcript.clone()).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(to_response(&transcript)))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )),
    }
}

pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TranscriptResponse>, (StatusCode, Json<MessageResponse>)> {
    let crud = TranscriptCrud::new(&state.db);

    match crud.find_by_id(&id).await {
        Ok(Some(t)) => Ok(Json(to_response(&t))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse { message: "Transcript not found".to_string() }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )),
    }
}

pub async fn list_transcripts(
    State(state): State<AppState>,
) -> Result<Json<TranscriptListResponse>, (StatusCode, Json<MessageResponse>)> {
    let crud = TranscriptCrud::new(&state.db);

    let transcripts = crud.find_all().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )
    })?;

    Ok(Json(TranscriptListResponse {
        transcripts: transcripts.iter().map(to_response).collect(),
    }))
}

pub async fn generate_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenerateSummaryResponse>, (StatusCode, Json<MessageResponse>)> {
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

    let summary = state
        .llm
        .summarize(&transcript.original_text, &transcript.custom_prompt)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: format!("Error generating summary: {}", e),
                }),
            )
        })?;

    if let Err(e) = crud.set_generated_summary(&id, &summary).await {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    Ok(Json(GenerateSummaryResponse { summary }))
}

pub async fn update_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSummaryRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let crud = TranscriptCrud::new(&state.db);

    match crud.set_edited_summary(&id, &payload.edited_summary).await {
        Ok(true) => Ok(Json(MessageResponse {
            message: "Summary updated successfully".to_string(),
        })),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse { message: "Transcript not found".to_string() }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )),
    }
}

pub async fn delete_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let crud = TranscriptCrud::new(&state.db);

    match crud.delete(&id).await {
        Ok(true) => Ok(Json(MessageResponse {
            message: "Transcript deleted successfully".to_string(),
        })),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse { message: "Transcript not found".to_string() }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )),
    }
}
