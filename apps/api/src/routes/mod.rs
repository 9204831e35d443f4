pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::scoring::handlers as scoring;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/projects", get(scoring::handle_list_projects))
        .route("/api/v1/score", post(scoring::handle_score))
        // Session API
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/resume",
            put(session::handle_save_resume),
        )
        .route(
            "/api/v1/sessions/:id/score",
            post(session::handle_score_session),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(session::handle_preview_document),
        )
        .route(
            "/api/v1/sessions/:id/document",
            get(session::handle_download_document),
        )
        .with_state(state)
}
