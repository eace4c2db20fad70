pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::matching::handlers as matching_handlers;
use crate::messaging::handlers as messaging_handlers;
use crate::profiles::handlers as profile_handlers;
use crate::scheduling::handlers as scheduling_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidates & behavioural profiles
        .route(
            "/api/v1/candidates",
            post(profile_handlers::handle_create_candidate),
        )
        .route(
            "/api/v1/candidates/:id",
            get(profile_handlers::handle_get_candidate),
        )
        .route(
            "/api/v1/candidates/:id/assessment",
            post(profile_handlers::handle_submit_assessment),
        )
        .route(
            "/api/v1/candidates/:id/profile",
            get(profile_handlers::handle_get_profile),
        )
        .route(
            "/api/v1/candidates/:id/profile/print",
            get(profile_handlers::handle_get_print_snapshot),
        )
        // PDF export
        .route(
            "/api/v1/candidates/:id/export",
            post(export_handlers::handle_create_export),
        )
        .route(
            "/api/v1/exports/:id",
            get(export_handlers::handle_get_export),
        )
        .route(
            "/api/v1/exports/:id/status",
            get(export_handlers::handle_get_export_status),
        )
        // Jobs & matching
        .route("/api/v1/jobs", post(matching_handlers::handle_create_job))
        .route("/api/v1/jobs/:id", get(matching_handlers::handle_get_job))
        .route(
            "/api/v1/jobs/:id/matches",
            get(matching_handlers::handle_list_matches),
        )
        // Interview scheduling
        .route(
            "/api/v1/interviews",
            post(scheduling_handlers::handle_create_interview)
                .get(scheduling_handlers::handle_list_interviews),
        )
        .route(
            "/api/v1/interviews/:id/status",
            patch(scheduling_handlers::handle_update_status),
        )
        // Messaging
        .route(
            "/api/v1/messages",
            post(messaging_handlers::handle_send_message)
                .get(messaging_handlers::handle_list_messages),
        )
        .with_state(state)
}
