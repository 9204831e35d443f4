//! Axum route handlers for editing sessions.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::{download_file_name, render_resume_html};
use crate::scoring::analysis::AtsReport;
use crate::scoring::handlers::score_resume;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub resume: Option<ResumeData>,
}

#[derive(Debug, Deserialize)]
pub struct SessionScoreRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub session: Session,
    pub missing_required_fields: Vec<&'static str>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> (StatusCode, Json<Session>) {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let session = state.sessions.create(request.resume).await;
    info!(
        "Session {} created ({} active)",
        session.id,
        state.sessions.len().await
    );
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(find_session(&state, id).await?))
}

/// PUT /api/v1/sessions/:id/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(resume): Json<ResumeData>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let missing_required_fields = resume.missing_required_fields();
    let session = state
        .sessions
        .save_resume(id, resume)
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(SaveResumeResponse {
        session,
        missing_required_fields,
    }))
}

/// POST /api/v1/sessions/:id/score
///
/// Scores the saved résumé and keeps the report for rendering.
pub async fn handle_score_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SessionScoreRequest>,
) -> Result<Json<AtsReport>, AppError> {
    let session = find_session(&state, id).await?;
    let resume = session.resume.unwrap_or_default();

    let report = score_resume(&state, &resume, &request.jd_text)?;
    info!(
        "Session {id} scored {}/100",
        report.breakdown.total_score
    );

    state
        .sessions
        .record_report(id, session.revision, request.jd_text, report.clone())
        .await?;

    Ok(Json(report))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let (_, html) = render_session(&state, id).await?;
    Ok(Html(html))
}

/// GET /api/v1/sessions/:id/document
///
/// Same document as the preview, served as a file download.
pub async fn handle_download_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (name, html) = render_session(&state, id).await?;
    let disposition = format!("attachment; filename=\"{}\"", download_file_name(&name));

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    )
        .into_response())
}

async fn render_session(state: &AppState, id: Uuid) -> Result<(String, String), AppError> {
    let session = find_session(state, id).await?;
    let resume = session.resume.ok_or_else(|| {
        AppError::Validation("Save resume information before rendering the document".to_string())
    })?;
    let selected = session
        .last_report
        .map(|r| r.ranked_projects)
        .unwrap_or_default();

    let html = render_resume_html(&resume, &selected)?;
    Ok((resume.name, html))
}

async fn find_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
