use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{InterviewRow, INTERVIEW_STATUSES};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateInterviewRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct InterviewFilter {
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// POST /api/v1/interviews
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<Json<InterviewRow>, AppError> {
    let interview: InterviewRow = sqlx::query_as(
        r#"
        INSERT INTO interviews (id, candidate_id, job_id, scheduled_at, status, location, notes)
        VALUES ($1, $2, $3, $4, 'proposed', $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.candidate_id)
    .bind(req.job_id)
    .bind(req.scheduled_at)
    .bind(&req.location)
    .bind(&req.notes)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(interview))
}

/// GET /api/v1/interviews?candidate_id=&job_id=
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(filter): Query<InterviewFilter>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let interviews: Vec<InterviewRow> = sqlx::query_as(
        r#"
        SELECT * FROM interviews
        WHERE ($1::uuid IS NULL OR candidate_id = $1)
          AND ($2::uuid IS NULL OR job_id = $2)
        ORDER BY scheduled_at
        "#,
    )
    .bind(filter.candidate_id)
    .bind(filter.job_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(interviews))
}

/// PATCH /api/v1/interviews/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<InterviewRow>, AppError> {
    if !INTERVIEW_STATUSES.contains(&req.status.as_str()) {
        return Err(AppError::Validation(format!(
            "Unknown interview status '{}'; expected one of: {}",
            req.status,
            INTERVIEW_STATUSES.join(", ")
        )));
    }

    let interview: Option<InterviewRow> = sqlx::query_as(
        "UPDATE interviews SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(&req.status)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    interview
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_catalogue_contains_lifecycle_states() {
        for status in ["proposed", "confirmed", "completed", "cancelled"] {
            assert!(INTERVIEW_STATUSES.contains(&status));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected_by_catalogue() {
        assert!(!INTERVIEW_STATUSES.contains(&"rescheduled"));
    }
}
