use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExportRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    /// Object key of the rendered PDF in the exports bucket.
    pub s3_key: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
