use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::modules::email::model::EmailLog;

const COLLECTION_NAME: &str = "email_logs";

pub struct EmailLogCrud {
    collection: Collection<EmailLog>,
}

impl EmailLogCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, log: EmailLog) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(log).await?;
        Ok(())
    }

    pub async fn find_by_transcript(
        &self,
        transcript_id: &str,
    ) -> Result<Vec<EmailLog>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! { "transcript_id": transcript_id })
            .sort(doc! { "sent_at": -1 })
            .await?;

        cursor.try_collect().await
    }
}
