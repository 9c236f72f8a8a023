use bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::env;

pub async fn connect() -> Database {
    let uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let db_name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "meeting_notes".to_string());

    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to connect to MongoDB");

    client.database(&db_name)
}

/// Best-effort index creation at startup. A failure is logged and the server
/// keeps running without the index.
pub async fn ensure_indexes(db: &Database) {
    let transcripts: Collection<Document> = db.collection("transcripts");
    let email_logs: Collection<Document> = db.collection("email_logs");

    let transcript_id = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    let created_at = IndexModel::builder().keys(doc! { "created_at": 1 }).build();
    let log_transcript_id = IndexModel::builder().keys(doc! { "transcript_id": 1 }).build();

    if let Err(e) = transcripts.create_index(transcript_id).await {
        tracing::warn!("failed to create transcripts.id index: {}", e);
    }
    if let Err(e) = transcripts.create_index(created_at).await {
        tracing::warn!("failed to create transcripts.created_at index: {}", e);
    }
    if let Err(e) = email_logs.create_index(log_transcript_id).await {
        tracing::warn!("failed to create email_logs.transcript_id index: {}", e);
    }
}
