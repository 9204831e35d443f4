//! Fit Scoring: pluggable, trait-based scorer that measures résumé text vs a parsed JD.
//!
//! Default: `KeywordFitScorer` (keyword/phrase overlap, deterministic).
//!
//! `AppState` holds an `Arc<dyn FitScorer>`, chosen at startup.
//!
//! Matching is raw substring containment on lower-cased text, not bounded to
//! word edges: "sql" matches inside "mysql" and "led" inside "called".

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeText;
use crate::scoring::jd_parser::ParsedJD;
use crate::scoring::lexicon::{ACTION_VERBS, IMPACT_WORDS};

pub const KEYWORD_WEIGHT: u32 = 40;
pub const TECH_WEIGHT: u32 = 25;
pub const PHRASE_WEIGHT: u32 = 20;
pub const ACTION_VERB_WEIGHT: u32 = 10;
/// The output template is always counted as ATS-compliant.
pub const FORMAT_SCORE: u32 = 5;
pub const MAX_TOTAL: u32 = 100;

/// "40%", "12.5 %" or "10+".
static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?\s*%|\d+\+").expect("valid quantity regex"));

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Component scores. Each component is within `0..=` its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,      // 0 – 40
    pub tech_score: f64,         // 0 – 25
    pub phrase_score: f64,       // 0 – 20
    pub action_verb_score: f64,  // 0 – 10
    pub format_score: f64,       // 5
    pub total_score: u32,        // floor(sum), ≤ 100
}

/// What matched and what did not, in job-description order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Tech terms in the job description and the résumé.
    pub matched_tech: Vec<String>,
    pub missing_tech: Vec<String>,
    pub matched_phrases: Vec<String>,
    pub unique_phrase_count: usize,
    /// Action verbs found in the experience section.
    pub action_verbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAnalysis {
    pub breakdown: ScoreBreakdown,
    pub matches: MatchDetails,
    pub has_quantifiable_achievement: bool,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap backends without touching
/// the handlers or the analysis pipeline.
pub trait FitScorer: Send + Sync {
    fn score(&self, resume: &ResumeText, parsed_jd: &ParsedJD) -> FitAnalysis;
}

/// Keyword/phrase overlap scorer.
///
/// Algorithm:
/// 1. keyword_score = matched keywords / max(keywords, 1) × 40
/// 2. tech_score = matched JD tech terms / max(JD tech terms, 1) × 25, 0 without JD tech terms
/// 3. phrase_score = matched unique phrases / max(unique phrases, 1) × 20
/// 4. action_verb_score = verbs in experience / |ACTION_VERBS| × 10
/// 5. total = min(100, floor(sum) + 5), with the sum taken exactly
pub struct KeywordFitScorer;

impl FitScorer for KeywordFitScorer {
    fn score(&self, resume: &ResumeText, parsed_jd: &ParsedJD) -> FitAnalysis {
        compute_keyword_fit(resume, parsed_jd)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword fit algorithm
// ────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub fn compute_keyword_fit(resume: &ResumeText, parsed_jd: &ParsedJD) -> FitAnalysis {
    let combined = resume.combined();
    let experience = resume.section("experience");

    let (matched_keywords, missing_keywords) =
        partition_by_presence(parsed_jd.keywords.iter().map(String::as_str), &combined);
    let (matched_tech, missing_tech) =
        partition_by_presence(parsed_jd.tech_terms.iter().map(String::as_str), &combined);

    let unique_phrases = parsed_jd.unique_phrases();
    let (matched_phrases, _) = partition_by_presence(unique_phrases.iter().copied(), &combined);

    // A blank JD earns no job-relative credit at all, verbs included.
    let action_verbs: Vec<String> = if parsed_jd.is_blank() {
        Vec::new()
    } else {
        ACTION_VERBS
            .iter()
            .filter(|verb| experience.contains(*verb))
            .map(|verb| verb.to_string())
            .collect()
    };

    // (weight, hits, out of); an empty tech list contributes nothing
    let components = [
        Component::new(KEYWORD_WEIGHT, matched_keywords.len(), parsed_jd.keywords.len()),
        Component::new(TECH_WEIGHT, matched_tech.len(), parsed_jd.tech_terms.len()),
        Component::new(PHRASE_WEIGHT, matched_phrases.len(), unique_phrases.len()),
        Component::new(ACTION_VERB_WEIGHT, action_verbs.len(), ACTION_VERBS.len()),
    ];
    let [keyword_score, tech_score, phrase_score, action_verb_score] =
        components.map(|c| c.score());
    let total_score = floor_sum(&components).saturating_add(FORMAT_SCORE).min(MAX_TOTAL);

    tracing::debug!(
        keywords = parsed_jd.keywords.len(),
        matched = matched_keywords.len(),
        tech = parsed_jd.tech_terms.len(),
        total_score,
        "Computed keyword fit"
    );

    FitAnalysis {
        breakdown: ScoreBreakdown {
            keyword_score,
            tech_score,
            phrase_score,
            action_verb_score,
            format_score: f64::from(FORMAT_SCORE),
            total_score,
        },
        matches: MatchDetails {
            matched_keywords,
            missing_keywords,
            matched_tech,
            missing_tech,
            matched_phrases,
            unique_phrase_count: unique_phrases.len(),
            action_verbs,
        },
        has_quantifiable_achievement: has_quantifiable_achievement(experience),
        scorer_backend: "keyword".to_string(),
    }
}

/// True when the text has a percentage, an "N+" figure, or an outcome word.
pub fn has_quantifiable_achievement(experience: &str) -> bool {
    let lower = experience.to_lowercase();
    QUANTITY_PATTERN.is_match(&lower) || IMPACT_WORDS.iter().any(|w| lower.contains(w))
}

/// Splits terms into (found in `haystack`, not found), preserving order.
fn partition_by_presence<'a>(
    terms: impl Iterator<Item = &'a str>,
    haystack: &str,
) -> (Vec<String>, Vec<String>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for term in terms {
        if haystack.contains(term) {
            found.push(term.to_string());
        } else {
            missing.push(term.to_string());
        }
    }
    (found, missing)
}

/// One weighted ratio: `weight × hits / max(out_of, 1)`.
#[derive(Debug, Clone, Copy)]
struct Component {
    weight: u32,
    hits: usize,
    out_of: usize,
}

impl Component {
    fn new(weight: u32, hits: usize, out_of: usize) -> Self {
        Self {
            weight,
            hits,
            out_of: out_of.max(1),
        }
    }

    /// Reported value. Not used for the total.
    fn score(self) -> f64 {
        f64::from(self.weight) * self.hits as f64 / self.out_of as f64
    }
}

/// `floor(Σ weight × hits / out_of)`, exact: summed over a common denominator
/// in integers so a whole-number total never floors to one below.
fn floor_sum(components: &[Component]) -> u32 {
    let denominator: u128 = components.iter().map(|c| c.out_of as u128).product();
    let numerator: u128 = components
        .iter()
        .map(|c| u128::from(c.weight) * c.hits as u128 * (denominator / c.out_of as u128))
        .sum();
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::jd_parser::parse_jd;

    const SCENARIO_JD: &str = "We need a Python developer with SQL and AWS experience";

    fn resume(sections: &[(&str, &str)]) -> ResumeText {
        ResumeText::from_sections(sections.iter().copied())
    }

    #[test]
    fn test_scenario_tech_two_of_three() {
        let text = resume(&[("skills", "Python, SQL")]);
        let analysis = compute_keyword_fit(&text, &parse_jd(SCENARIO_JD));

        assert_eq!(analysis.matches.matched_tech, vec!["python", "sql"]);
        assert_eq!(analysis.matches.missing_tech, vec!["aws"]);
        let expected = 2.0 / 3.0 * f64::from(TECH_WEIGHT);
        assert!((analysis.breakdown.tech_score - expected).abs() < 1e-9);
        // keywords: need, python, developer, experience → only python matches
        assert!((analysis.breakdown.keyword_score - 10.0).abs() < 1e-9);
        assert_eq!(analysis.breakdown.phrase_score, 0.0);
        assert_eq!(analysis.breakdown.total_score, 31);
    }

    #[test]
    fn test_all_keywords_present_scores_full_keyword_weight() {
        let jd = parse_jd(SCENARIO_JD);
        let everything = jd.keywords.iter().cloned().collect::<Vec<_>>().join(" ");
        let text = resume(&[("summary", &everything)]);
        let analysis = compute_keyword_fit(&text, &jd);
        assert_eq!(analysis.breakdown.keyword_score, f64::from(KEYWORD_WEIGHT));
        assert!(analysis.matches.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_jd_scores_format_baseline_only() {
        let text = resume(&[
            ("experience", "Led, developed, built, designed and improved things by 40%"),
            ("skills", "Python, Rust"),
        ]);
        let analysis = compute_keyword_fit(&text, &parse_jd(""));
        assert_eq!(analysis.breakdown.keyword_score, 0.0);
        assert_eq!(analysis.breakdown.tech_score, 0.0);
        assert_eq!(analysis.breakdown.phrase_score, 0.0);
        assert_eq!(analysis.breakdown.action_verb_score, 0.0);
        assert_eq!(analysis.breakdown.total_score, 5);
    }

    #[test]
    fn test_tech_score_zero_without_jd_tech_terms() {
        let text = resume(&[("skills", "python")]);
        let analysis = compute_keyword_fit(&text, &parse_jd("Friendly cashier wanted"));
        assert_eq!(analysis.breakdown.tech_score, 0.0);
        assert!(analysis.matches.matched_tech.is_empty());
    }

    #[test]
    fn test_substring_matching_inside_words() {
        let text = resume(&[("skills", "mysql")]);
        let analysis = compute_keyword_fit(&text, &parse_jd("SQL"));
        assert_eq!(analysis.matches.matched_tech, vec!["sql"]);
        assert_eq!(analysis.breakdown.tech_score, f64::from(TECH_WEIGHT));
    }

    #[test]
    fn test_action_verbs_only_counted_in_experience() {
        let jd = parse_jd("Backend engineer");
        let in_summary = resume(&[("summary", "developed implemented designed")]);
        assert!(compute_keyword_fit(&in_summary, &jd).matches.action_verbs.is_empty());

        let in_experience = resume(&[("experience", "developed implemented designed")]);
        let analysis = compute_keyword_fit(&in_experience, &jd);
        assert_eq!(
            analysis.matches.action_verbs,
            vec!["designed", "developed", "implemented"]
        );
        let expected = 3.0 / ACTION_VERBS.len() as f64 * f64::from(ACTION_VERB_WEIGHT);
        assert!((analysis.breakdown.action_verb_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_phrases_counted_once() {
        let jd = parse_jd("data pipelines data pipelines");
        // unique phrases: "data pipelines", "pipelines data"
        assert_eq!(jd.phrases.len(), 3);
        let text = resume(&[("experience", "built data pipelines")]);
        let analysis = compute_keyword_fit(&text, &jd);
        assert_eq!(analysis.matches.unique_phrase_count, 2);
        assert_eq!(analysis.matches.matched_phrases, vec!["data pipelines"]);
        assert!((analysis.breakdown.phrase_score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_components_within_bounds_and_total_capped() {
        let jd = parse_jd(
            "Senior Python engineer: developed, implemented, designed, led, managed, \
             created, built, improved, increased, reduced, optimized, launched, delivered, \
             automated, analyzed, collaborated, achieved. Docker Kubernetes AWS.",
        );
        let text = resume(&[("experience", &jd.normalized)]);
        let b = compute_keyword_fit(&text, &jd).breakdown;

        assert!(b.keyword_score >= 0.0 && b.keyword_score <= f64::from(KEYWORD_WEIGHT));
        assert!(b.tech_score >= 0.0 && b.tech_score <= f64::from(TECH_WEIGHT));
        assert!(b.phrase_score >= 0.0 && b.phrase_score <= f64::from(PHRASE_WEIGHT));
        assert!(b.action_verb_score >= 0.0 && b.action_verb_score <= f64::from(ACTION_VERB_WEIGHT));
        assert_eq!(b.total_score, 100);
    }

    #[test]
    fn test_whole_number_sum_is_not_floored_down() {
        // 2/3 × 25 + 1/6 × 20 + 5 == 25
        let jd = ParsedJD {
            normalized: "sql aws git".to_string(),
            tech_terms: vec!["sql".to_string(), "aws".to_string(), "git".to_string()],
            phrases: ["p1 a", "q2 b", "q3 c", "q4 d", "q5 e", "q6 f"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            ..Default::default()
        };
        let text = resume(&[("skills", "sql aws p1 a")]);
        let b = compute_keyword_fit(&text, &jd).breakdown;
        assert_eq!(b.total_score, 25);
    }

    #[test]
    fn test_floor_sum_is_exact() {
        let parts = [Component::new(25, 2, 3), Component::new(20, 1, 6)];
        assert_eq!(floor_sum(&parts), 20);
        let parts = [Component::new(40, 1, 3), Component::new(10, 0, 0)];
        assert_eq!(floor_sum(&parts), 13);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let jd = parse_jd(SCENARIO_JD);
        let text = resume(&[("skills", "Python, SQL"), ("experience", "built ETL in python")]);
        let first = compute_keyword_fit(&text, &jd);
        let second = compute_keyword_fit(&text, &jd);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quantifiable_achievement_patterns() {
        assert!(has_quantifiable_achievement("cut costs by 30%"));
        assert!(has_quantifiable_achievement("served 10+ clients"));
        assert!(has_quantifiable_achievement("Decreased churn"));
        assert!(!has_quantifiable_achievement("maintained the build in 2021"));
        assert!(!has_quantifiable_achievement(""));
    }

    #[test]
    fn test_scorer_backend_label_is_keyword() {
        let analysis = KeywordFitScorer.score(&ResumeText::default(), &parse_jd(SCENARIO_JD));
        assert_eq!(analysis.scorer_backend, "keyword");
    }
}
