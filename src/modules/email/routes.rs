use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::email::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/transcripts/{id}/email", post(controller::send_email))
        .route(
            "/api/transcripts/{id}/email-logs",
            get(controller::list_email_logs),
        )
}
