//! Improvement suggestions derived from the gaps in a fit analysis.
//!
//! Always recomputed from the analysis, never cached. Never returns an empty list.

use crate::scoring::fit_scoring::FitAnalysis;
use crate::scoring::lexicon::is_tech_skill;
use crate::scoring::ScoringConfig;

pub const QUANTIFY_MESSAGE: &str =
    "Quantify your achievements with numbers, percentages or outcomes (e.g. \"reduced costs by 20%\").";
pub const ACTION_VERB_MESSAGE: &str =
    "Start more experience bullets with strong action verbs such as developed, implemented, led or optimized.";
pub const PHRASE_MESSAGE: &str =
    "Mirror more of the job description's exact phrasing in your summary and experience.";
pub const WELL_ALIGNED_MESSAGE: &str =
    "Your resume is well aligned with this job description. No changes needed.";

/// Builds the ordered recommendation list for one analysis.
///
/// Order: missing tech terms, missing keywords, quantification, action verbs,
/// phrasing. At or above the threshold only the confirmation is returned.
pub fn generate_recommendations(analysis: &FitAnalysis, config: &ScoringConfig) -> Vec<String> {
    if analysis.breakdown.total_score >= config.recommendation_threshold {
        return vec![WELL_ALIGNED_MESSAGE.to_string()];
    }

    let matches = &analysis.matches;
    let mut recommendations = Vec::new();

    if !matches.missing_tech.is_empty() {
        let top: Vec<&str> = matches
            .missing_tech
            .iter()
            .take(config.max_missing_tech)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Add these technical skills from the job description if you have them: {}",
            top.join(", ")
        ));
    }

    let general: Vec<&str> = matches
        .missing_keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !is_tech_skill(k))
        .collect();
    if !general.is_empty() && general.len() >= config.min_missing_keywords {
        let top: Vec<&str> = general.into_iter().take(config.max_missing_keywords).collect();
        recommendations.push(format!(
            "Work these job keywords into your resume where accurate: {}",
            top.join(", ")
        ));
    }

    if !analysis.has_quantifiable_achievement {
        recommendations.push(QUANTIFY_MESSAGE.to_string());
    }

    if matches.action_verbs.len() < config.min_action_verbs {
        recommendations.push(ACTION_VERB_MESSAGE.to_string());
    }

    if matches.matched_phrases.len() < config.phrase_match_threshold {
        recommendations.push(PHRASE_MESSAGE.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(WELL_ALIGNED_MESSAGE.to_string());
    }
    recommendations
}
