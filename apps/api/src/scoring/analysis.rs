//! ATS Analysis: orchestrates one scoring pass.
//!
//! Flow: parse_jd → fit_scorer.score → rank_projects → generate_recommendations.
//!
//! Stateless: the caller owns whatever it keeps between passes.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalogue::ProjectCatalogue;
use crate::models::resume::ResumeText;
use crate::scoring::fit_scoring::{FitScorer, MatchDetails, ScoreBreakdown};
use crate::scoring::jd_parser::parse_jd;
use crate::scoring::project_ranker::{rank_projects, RankedProject};
use crate::scoring::recommendations::generate_recommendations;
use crate::scoring::ScoringConfig;

/// Everything the rendering layer needs from one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub breakdown: ScoreBreakdown,
    pub matches: MatchDetails,
    pub has_quantifiable_achievement: bool,
    pub contact_complete: bool,
    pub ranked_projects: Vec<RankedProject>,
    pub recommendations: Vec<String>,
    pub scorer_backend: String,
}

/// Inputs for one pass. Borrowed; nothing is retained.
pub struct AnalysisInput<'a> {
    pub resume: &'a ResumeText,
    pub contact_complete: bool,
    pub jd_text: &'a str,
}

/// Runs the full scoring pipeline.
///
/// Steps:
/// 1. parse_jd() → keywords, phrases, tech terms
/// 2. fit_scorer.score() → breakdown + matches
/// 3. rank_projects() using the résumé's tech matches
/// 4. generate_recommendations() from the gaps
pub fn analyze(
    input: AnalysisInput<'_>,
    fit_scorer: &dyn FitScorer,
    catalogue: &ProjectCatalogue,
    config: &ScoringConfig,
) -> AtsReport {
    // Step 1: Parse JD
    let parsed_jd = parse_jd(input.jd_text);

    // Step 2: Fit score
    let fit = fit_scorer.score(input.resume, &parsed_jd);
    info!(
        "ATS score: {}/100 ({} of {} keywords matched)",
        fit.breakdown.total_score,
        fit.matches.matched_keywords.len(),
        parsed_jd.keywords.len()
    );

    // Step 3: Project ranking
    let ranked_projects = rank_projects(
        catalogue,
        &parsed_jd,
        &fit.matches.matched_tech,
        config.top_projects,
    );

    // Step 4: Recommendations
    let recommendations = generate_recommendations(&fit, config);

    AtsReport {
        breakdown: fit.breakdown,
        matches: fit.matches,
        has_quantifiable_achievement: fit.has_quantifiable_achievement,
        contact_complete: input.contact_complete,
        ranked_projects,
        recommendations,
        scorer_backend: fit.scorer_backend,
    }
}
