//! Axum route handlers for the scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalogue::ProjectEntry;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::scoring::analysis::{analyze, AnalysisInput, AtsReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume: ResumeData,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: AtsReport,
    pub missing_required_fields: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CatalogueResponse {
    pub version: u32,
    pub projects: Vec<ProjectEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared entry point
// ────────────────────────────────────────────────────────────────────────────

/// Validates the job description and runs one analysis pass with the app's scorer.
pub fn score_resume(
    state: &AppState,
    resume: &ResumeData,
    jd_text: &str,
) -> Result<AtsReport, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let text = resume.to_resume_text();
    Ok(analyze(
        AnalysisInput {
            resume: &text,
            contact_complete: resume.contact_complete(),
            jd_text,
        },
        state.fit_scorer.as_ref(),
        &state.catalogue,
        &state.config.scoring,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score
///
/// Stateless scoring of a résumé against a job description.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let report = score_resume(&state, &request.resume, &request.jd_text)?;
    info!("Scored resume: {}/100", report.breakdown.total_score);

    Ok(Json(ScoreResponse {
        report,
        missing_required_fields: request.resume.missing_required_fields(),
    }))
}

/// GET /api/v1/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<CatalogueResponse> {
    Json(CatalogueResponse {
        version: state.catalogue.version,
        projects: state.catalogue.projects.clone(),
    })
}
