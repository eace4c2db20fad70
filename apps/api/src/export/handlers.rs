use axum::{
    extract::{Path, State},
    Json,
};
use redis::AsyncCommands;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::export::ExportRow;
use crate::profiles::handlers::fetch_candidate_with_assessment;
use crate::profiles::snapshot::{build_snapshot, PrintSnapshot};
use crate::state::AppState;

/// Export status keys expire after an hour; the export row is the durable
/// record, the key carries the transient rendering/failed states that never
/// reach the database.
const STATUS_TTL_SECS: u64 = 3600;

pub const STATUS_RENDERING: &str = "rendering";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// Response of the status endpoint polled by export UIs.
#[derive(Debug, Serialize)]
pub struct ExportStatus {
    pub id: Uuid,
    pub status: String,
}

/// POST /api/v1/candidates/:id/export
///
/// Builds the print snapshot, sends it to the render service, stores the
/// returned PDF in S3, and records the export. Synchronous: the response
/// carries the completed export record. The status key transitions
/// rendering → completed, or rendering → failed on any error, so pollers
/// never see a stale "rendering".
pub async fn handle_create_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportRow>, AppError> {
    let (candidate, assessment) = fetch_candidate_with_assessment(&state.db, id).await?;
    let snapshot = build_snapshot(&candidate, assessment.as_ref());

    let export_id = Uuid::new_v4();
    set_status(&state, export_id, STATUS_RENDERING).await?;

    match run_export(&state, id, export_id, &snapshot).await {
        Ok(export) => {
            set_status(&state, export_id, STATUS_COMPLETED).await?;
            tracing::info!(
                "Export {export_id} completed for candidate {id} ({})",
                export.s3_key
            );
            Ok(Json(export))
        }
        Err(e) => {
            // Best-effort terminal status; the original error is what the
            // caller needs to see even if redis is down too.
            if let Err(redis_err) = set_status(&state, export_id, STATUS_FAILED).await {
                tracing::warn!("Could not record failed status for export {export_id}: {redis_err}");
            }
            Err(e)
        }
    }
}

/// Render, upload, and record one export. Split out so the caller owns the
/// status-key lifecycle around it.
async fn run_export(
    state: &AppState,
    candidate_id: Uuid,
    export_id: Uuid,
    snapshot: &PrintSnapshot,
) -> Result<ExportRow, AppError> {
    let pdf = state
        .render
        .render(snapshot)
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;

    let s3_key = format!("exports/{candidate_id}/{export_id}.pdf");
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&s3_key)
        .content_type("application/pdf")
        .body(pdf.to_vec().into())
        .send()
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    let export: ExportRow = sqlx::query_as(
        r#"
        INSERT INTO exports (id, candidate_id, s3_key, status)
        VALUES ($1, $2, $3, 'completed')
        RETURNING *
        "#,
    )
    .bind(export_id)
    .bind(candidate_id)
    .bind(&s3_key)
    .fetch_one(&state.db)
    .await?;

    Ok(export)
}

/// GET /api/v1/exports/:id
pub async fn handle_get_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportRow>, AppError> {
    let export: Option<ExportRow> = sqlx::query_as("SELECT * FROM exports WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    export
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Export {id} not found")))
}

/// GET /api/v1/exports/:id/status
///
/// The polling endpoint backed by the redis status keys. The transient key
/// wins while it lives (rendering/failed exports have no durable row);
/// after it expires, the export row answers for completed exports.
pub async fn handle_get_export_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportStatus>, AppError> {
    let mut conn = state.redis.get_multiplexed_async_connection().await?;
    let live: Option<String> = conn.get(status_key(id)).await?;

    if let Some(status) = live {
        return Ok(Json(ExportStatus { id, status }));
    }

    let export: Option<ExportRow> = sqlx::query_as("SELECT * FROM exports WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    export
        .map(|e| Json(ExportStatus { id, status: e.status }))
        .ok_or_else(|| AppError::NotFound(format!("Export {id} not found")))
}

/// One key format shared by the writer and the status endpoint.
fn status_key(export_id: Uuid) -> String {
    format!("export:{export_id}")
}

async fn set_status(state: &AppState, export_id: Uuid, status: &str) -> Result<(), AppError> {
    let mut conn = state.redis.get_multiplexed_async_connection().await?;
    conn.set_ex::<_, _, ()>(status_key(export_id), status, STATUS_TTL_SECS)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_key_embeds_export_id() {
        let id = Uuid::new_v4();
        assert_eq!(status_key(id), format!("export:{id}"));
    }

    #[test]
    fn test_status_values_are_distinct_terminal_and_transient() {
        assert_ne!(STATUS_RENDERING, STATUS_COMPLETED);
        assert_ne!(STATUS_RENDERING, STATUS_FAILED);
        assert_ne!(STATUS_COMPLETED, STATUS_FAILED);
    }

    #[test]
    fn test_export_status_serializes_flat() {
        let status = ExportStatus {
            id: Uuid::nil(),
            status: STATUS_FAILED.to_string(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "failed");
        assert!(json["id"].is_string());
    }
}
