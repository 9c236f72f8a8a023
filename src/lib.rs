use std::sync::Arc;

use mongodb::Database;

use crate::services::llm::SummarizerClient;
use crate::services::mailer::Mailer;

pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub llm: SummarizerClient,
    pub mailer: Arc<dyn Mailer>,
}
