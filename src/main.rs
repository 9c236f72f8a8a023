use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use recaply::config;
use recaply::modules;
use recaply::services::llm::SummarizerClient;
use recaply::services::mailer::SmtpMailer;
use recaply::AppState;

async fn root() -> Json<Value> {
    Json(json!({ "message": "Recaply API" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recaply=info,tower_http=info")),
        )
        .init();

    let db = config::database::connect().await;
    config::database::ensure_indexes(&db).await;

    let llm = SummarizerClient::new()?;
    let mailer = SmtpMailer::new(config::mail::MailConfig::from_env());

    let state = AppState {
        db,
        llm,
        mailer: Arc::new(mailer),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .merge(modules::transcript::routes::routes())
        .merge(modules::email::routes::routes())
        .layer(cors)
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
