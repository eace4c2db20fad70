use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::behavioural::classify;
use crate::behavioural::score::DiscScore;
use crate::errors::AppError;
use crate::matching::scorer::MatchReport;
use crate::models::candidate::{AssessmentRow, CandidateRow};
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One candidate in a job's match listing, ranked by match score.
#[derive(Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateRow,
    /// Archetype from the candidate's latest assessment; candidates without
    /// an assessment classify from the zero vector (balanced).
    pub archetype: String,
    pub report: MatchReport,
}

#[derive(Serialize)]
pub struct MatchListResponse {
    pub job: JobRow,
    pub matches: Vec<RankedCandidate>,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("Job title must not be empty".to_string()));
    }

    let job: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs (id, title, company, description, keywords)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.company)
    .bind(&req.description)
    .bind(&req.keywords)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(job))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = fetch_job(&state, id).await?;
    Ok(Json(job))
}

/// GET /api/v1/jobs/:id/matches
///
/// Scores every candidate against the job's keywords and returns them in
/// descending match order, each annotated with their behavioural archetype.
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchListResponse>, AppError> {
    let job = fetch_job(&state, id).await?;

    let candidates: Vec<CandidateRow> =
        sqlx::query_as("SELECT * FROM candidates ORDER BY created_at")
            .fetch_all(&state.db)
            .await?;

    let mut matches = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let report = state.match_scorer.score(&candidate, &job).await?;
        let archetype = candidate_archetype(&state, candidate.id).await?;
        matches.push(RankedCandidate {
            candidate,
            archetype,
            report,
        });
    }

    // Highest match first; ties keep insertion (creation) order.
    matches.sort_by(|a, b| b.report.overall_score.cmp(&a.report.overall_score));

    Ok(Json(MatchListResponse { job, matches }))
}

async fn fetch_job(state: &AppState, id: Uuid) -> Result<JobRow, AppError> {
    sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// Classifies from the latest assessment, or the zero vector when the
/// candidate has not taken the assessment yet.
async fn candidate_archetype(state: &AppState, candidate_id: Uuid) -> Result<String, AppError> {
    let assessment: Option<AssessmentRow> = sqlx::query_as(
        "SELECT * FROM assessments WHERE candidate_id = $1 ORDER BY version DESC LIMIT 1",
    )
    .bind(candidate_id)
    .fetch_optional(&state.db)
    .await?;

    let score = assessment
        .map(|a| DiscScore::new(a.dominance, a.influence, a.steadiness, a.conscientiousness))
        .unwrap_or_default();

    Ok(classify(&score).to_string())
}
