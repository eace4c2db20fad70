use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub full_name: String,
    /// Informal pronoun string as entered by the candidate ("she/her" etc).
    /// Consumed only by the pronoun resolver; never validated.
    pub pronouns: Option<String>,
    pub email: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// One DISC assessment submission. Append-only: resubmitting creates a new
/// version, the latest version is the live one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub version: i32,
    pub dominance: f32,
    pub influence: f32,
    pub steadiness: f32,
    pub conscientiousness: f32,
    pub created_at: DateTime<Utc>,
}
