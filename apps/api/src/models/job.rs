use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Keywords the match scorer compares candidate tags and summaries against.
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}
