use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::modules::transcript::model::Transcript;

const COLLECTION_NAME: &str = "transcripts";

pub struct TranscriptCrud {
    collection: Collection<Transcript>,
}

impl TranscriptCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, transcript: Transcript) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(transcript).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Transcript>, mongodb::error::Error> {
        self.collection.find_one(doc! { "id": id }).await
    }

    pub async fn find_all(&self) -> Result<Vec<Transcript>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;

        cursor.try_collect().await
    }

    pub async fn set_generated_summary(
        &self,
        id: &str,
        summary: &str,
    ) -> Result<bool, mongodb::error::Error> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "generated_summary": summary, "updated_at": Utc::now().to_rfc3339() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn set_edited_summary(
        &self,
        id: &str,
        summary: &str,
    ) -> Result<bool, mongodb::error::Error> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "edited_summary": summary, "updated_at": Utc::now().to_rfc3339() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, mongodb::error::Error> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
