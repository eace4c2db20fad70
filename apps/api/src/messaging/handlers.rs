use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::message::MessageRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    /// Omit to start a new thread.
    pub thread_id: Option<Uuid>,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub body: String,
}

#[derive(Deserialize)]
pub struct ThreadQuery {
    pub thread_id: Uuid,
}

/// POST /api/v1/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<MessageRow>, AppError> {
    if req.body.trim().is_empty() {
        return Err(AppError::Validation(
            "Message body must not be empty".to_string(),
        ));
    }

    let thread_id = req.thread_id.unwrap_or_else(Uuid::new_v4);

    let message: MessageRow = sqlx::query_as(
        r#"
        INSERT INTO messages (id, thread_id, sender_id, recipient_id, body)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(thread_id)
    .bind(req.sender_id)
    .bind(req.recipient_id)
    .bind(&req.body)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(message))
}

/// GET /api/v1/messages?thread_id=
pub async fn handle_list_messages(
    State(state): State<AppState>,
    Query(params): Query<ThreadQuery>,
) -> Result<Json<Vec<MessageRow>>, AppError> {
    let messages: Vec<MessageRow> = sqlx::query_as(
        "SELECT * FROM messages WHERE thread_id = $1 ORDER BY created_at",
    )
    .bind(params.thread_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(messages))
}
