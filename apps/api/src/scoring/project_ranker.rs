//! Project Ranker: scores every catalogue entry against a job description and
//! keeps the top N.
//!
//! Deterministic: equal scores keep catalogue order (stable sort).

use serde::{Deserialize, Serialize};

use crate::catalogue::{ProjectCatalogue, ProjectEntry};
use crate::scoring::jd_parser::ParsedJD;

/// Per-match weights of the relevance formula.
const JOB_KEYWORD_POINTS: u32 = 2;
const CATALOGUE_KEYWORD_POINTS: u32 = 5;
const TECH_MATCH_POINTS: u32 = 3;

/// A catalogue entry paired with its relevance to one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProject {
    pub project: ProjectEntry,
    pub relevance_score: u32,
}

/// Ranks the catalogue and returns at most `top_n` entries, best first.
///
/// `tech_matches` is the set of tech terms the résumé shares with the job.
#[tracing::instrument(skip_all, fields(catalogue = catalogue.len(), top_n = top_n))]
pub fn rank_projects(
    catalogue: &ProjectCatalogue,
    parsed_jd: &ParsedJD,
    tech_matches: &[String],
    top_n: usize,
) -> Vec<RankedProject> {
    let mut ranked: Vec<RankedProject> = catalogue
        .projects
        .iter()
        .map(|project| RankedProject {
            relevance_score: compute_relevance(project, parsed_jd, tech_matches),
            project: project.clone(),
        })
        .collect();

    // Vec::sort_by is stable, so ties stay in catalogue order
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked.truncate(top_n);
    ranked
}

/// Relevance of one entry:
/// 2 × job keywords in (title + description)
/// + 5 × entry keywords in the job description
/// + 3 × résumé tech matches in (title + description).
pub fn compute_relevance(project: &ProjectEntry, parsed_jd: &ParsedJD, tech_matches: &[String]) -> u32 {
    let text = project.searchable_text();

    let job_keyword_hits = count_present(parsed_jd.keywords.iter(), &text);
    let catalogue_keyword_hits = count_present(project.keywords.iter(), &parsed_jd.normalized);
    let tech_hits = count_present(tech_matches.iter(), &text);

    JOB_KEYWORD_POINTS * job_keyword_hits
        + CATALOGUE_KEYWORD_POINTS * catalogue_keyword_hits
        + TECH_MATCH_POINTS * tech_hits
}

fn count_present<'a>(terms: impl Iterator<Item = &'a String>, haystack: &str) -> u32 {
    terms
        .filter(|term| !term.is_empty() && haystack.contains(term.as_str()))
        .count() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
