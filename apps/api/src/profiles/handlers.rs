use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::behavioural::{narrate, ArchetypeProfile, DiscScore, PronounContext};
use crate::errors::AppError;
use crate::models::candidate::{AssessmentRow, CandidateRow};
use crate::profiles::snapshot::{build_snapshot, score_of, PrintSnapshot};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateCandidateRequest {
    pub full_name: String,
    pub email: String,
    pub pronouns: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Raw assessment scores as produced by the upstream scoring step.
/// Accepted as-is: missing axes default to zero, nothing is validated.
/// Whatever arrives here classifies to some archetype.
#[derive(Deserialize)]
pub struct AssessmentSubmission {
    #[serde(flatten)]
    pub scores: DiscScore,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub candidate: CandidateRow,
    pub assessment: Option<AssessmentRow>,
    pub profile: ArchetypeProfile,
}

/// POST /api/v1/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CreateCandidateRequest>,
) -> Result<Json<CandidateRow>, AppError> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Candidate name must not be empty".to_string(),
        ));
    }

    let candidate: CandidateRow = sqlx::query_as(
        r#"
        INSERT INTO candidates (id, full_name, pronouns, email, headline, summary, tags)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.full_name)
    .bind(&req.pronouns)
    .bind(&req.email)
    .bind(&req.headline)
    .bind(&req.summary)
    .bind(&req.tags)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(candidate))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateRow>, AppError> {
    let candidate = fetch_candidate(&state.db, id).await?;
    Ok(Json(candidate))
}

/// POST /api/v1/candidates/:id/assessment
///
/// Stores a new assessment version (append-only) and returns the freshly
/// narrated profile so the client can render the result immediately.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssessmentSubmission>,
) -> Result<Json<ArchetypeProfile>, AppError> {
    let candidate = fetch_candidate(&state.db, id).await?;

    let latest: Option<AssessmentRow> = sqlx::query_as(
        "SELECT * FROM assessments WHERE candidate_id = $1 ORDER BY version DESC LIMIT 1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let version = latest.map(|a| a.version + 1).unwrap_or(1);
    let scores = req.scores;

    sqlx::query(
        r#"
        INSERT INTO assessments
            (id, candidate_id, version, dominance, influence, steadiness, conscientiousness)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(id)
    .bind(version)
    .bind(scores.dominance)
    .bind(scores.influence)
    .bind(scores.steadiness)
    .bind(scores.conscientiousness)
    .execute(&state.db)
    .await?;

    let pronouns = PronounContext::new(candidate.full_name, candidate.pronouns);
    Ok(Json(narrate(&scores, &pronouns)))
}

/// GET /api/v1/candidates/:id/profile
///
/// 404 only for an unknown candidate. A candidate with no assessment gets
/// the zero-score balanced profile: the profile surface never fails.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let (candidate, assessment) = fetch_candidate_with_assessment(&state.db, id).await?;

    let pronouns = PronounContext::new(candidate.full_name.clone(), candidate.pronouns.clone());
    let profile = narrate(&score_of(assessment.as_ref()), &pronouns);

    Ok(Json(ProfileResponse {
        candidate,
        assessment,
        profile,
    }))
}

/// GET /api/v1/candidates/:id/profile/print
///
/// The snapshot the headless renderer captures. Same narrate call as the
/// live profile, so exported PDFs always match the dashboard.
pub async fn handle_get_print_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PrintSnapshot>, AppError> {
    let (candidate, assessment) = fetch_candidate_with_assessment(&state.db, id).await?;
    Ok(Json(build_snapshot(&candidate, assessment.as_ref())))
}

pub async fn fetch_candidate(db: &PgPool, id: Uuid) -> Result<CandidateRow, AppError> {
    sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

pub async fn fetch_candidate_with_assessment(
    db: &PgPool,
    id: Uuid,
) -> Result<(CandidateRow, Option<AssessmentRow>), AppError> {
    let candidate = fetch_candidate(db, id).await?;

    let assessment: Option<AssessmentRow> = sqlx::query_as(
        "SELECT * FROM assessments WHERE candidate_id = $1 ORDER BY version DESC LIMIT 1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok((candidate, assessment))
}
