// ATS scoring engine
// Implements: tokenization, JD keyword extraction, weighted fit scoring,
// project ranking, recommendations. Pure functions over strings; no I/O.

pub mod analysis;
pub mod fit_scoring;
pub mod handlers;
pub mod jd_parser;
pub mod lexicon;
pub mod project_ranker;
pub mod recommendations;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

/// Tunable thresholds for one scoring pass. Loaded from the environment by `Config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Recommendations are produced below this total score.
    pub recommendation_threshold: u32,
    /// Fewer matched phrases than this triggers the phrasing recommendation.
    pub phrase_match_threshold: usize,
    /// Fewer matched action verbs than this triggers the action-verb recommendation.
    pub min_action_verbs: usize,
    /// Missing general keywords are listed only when at least this many remain.
    pub min_missing_keywords: usize,
    pub max_missing_tech: usize,
    pub max_missing_keywords: usize,
    /// Number of catalogue projects returned by the ranker.
    pub top_projects: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            recommendation_threshold: 80,
            phrase_match_threshold: 3,
            min_action_verbs: 5,
            min_missing_keywords: 5,
            max_missing_tech: 5,
            max_missing_keywords: 8,
            top_projects: 5,
        }
    }
}
