use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::modules::transcript::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/transcripts", post(controller::create_transcript))
        .route("/api/transcripts", get(controller::list_transcripts))
        .route("/api/transcripts/{id}", get(controller::get_transcript))
        .route("/api/transcripts/{id}", delete(controller::delete_transcript))
        .route(
            "/api/transcripts/{id}/generate-summary",
            post(controller::generate_summary),
        )
        .route("/api/transcripts/{id}/summary", put(controller::update_summary))
}
