//! JD Parser: extracts keywords, phrases and tech terms from a raw job description.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::scoring::lexicon::TECH_SKILLS;
use crate::scoring::tokenizer::{alphabetic_words, keyword_tokens, phrase_candidates};

/// Everything the scorer and ranker need from one job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJD {
    /// Lower-cased job description, used for substring checks.
    pub normalized: String,
    /// Significant single words, deduplicated, first-seen order.
    pub keywords: IndexSet<String>,
    /// Adjacent word pairs; may repeat.
    pub phrases: Vec<String>,
    /// Tech lexicon terms occurring in the description, ordered by first occurrence.
    pub tech_terms: Vec<String>,
}

impl ParsedJD {
    /// Phrases with repeats removed, first-seen order.
    pub fn unique_phrases(&self) -> IndexSet<&str> {
        self.phrases.iter().map(String::as_str).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.trim().is_empty()
    }
}

/// Parses a job description into keyword and phrase sets.
pub fn parse_jd(jd_text: &str) -> ParsedJD {
    let normalized = jd_text.to_lowercase();
    let keywords = keyword_tokens(&normalized);
    let phrases = phrase_candidates(&normalized);
    let tech_terms = find_tech_terms(&normalized);

    ParsedJD {
        normalized,
        keywords,
        phrases,
        tech_terms,
    }
}

/// Lexicon terms present in `text`, ordered by first position.
///
/// Single-word terms must equal a whole alphabetic word, with no length filter,
/// so "sql" counts and "trustworthy" does not yield "rust". Multi-word and
/// punctuated terms ("machine learning", "ci/cd") are matched as substrings.
fn find_tech_terms(text: &str) -> Vec<String> {
    let words = alphabetic_words(text);
    let mut found: Vec<(usize, &str)> = TECH_SKILLS
        .iter()
        .filter_map(|term| {
            let position = if term.chars().all(char::is_alphabetic) {
                words.iter().find(|(_, w)| w == term).map(|(pos, _)| *pos)
            } else {
                text.find(term)
            };
            position.map(|pos| (pos, *term))
        })
        .collect();
    // stable: equal positions keep lexicon order
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, term)| term.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // JD fixture: backend role
    const BACKEND_JD: &str = r#"
        Senior Backend Engineer
        You will design microservices in Rust and Python, deploy with Docker and
        Kubernetes on AWS, and own our PostgreSQL data layer.
    "#;

    #[test]
    fn test_parse_scenario_jd() {
        let parsed = parse_jd("We need a Python developer with SQL and AWS experience");
        let keywords: Vec<&str> = parsed.keywords.iter().map(String::as_str).collect();
        assert_eq!(keywords, vec!["need", "python", "developer", "experience"]);
        assert_eq!(parsed.tech_terms, vec!["python", "sql", "aws"]);
        assert_eq!(parsed.phrases.len(), 6);
    }

    #[test]
    fn test_tech_terms_in_order_of_appearance() {
        let parsed = parse_jd(BACKEND_JD);
        assert_eq!(
            parsed.tech_terms,
            vec![
                "microservices",
                "rust",
                "python",
                "docker",
                "kubernetes",
                "aws",
                "postgresql",
            ]
        );
    }

    #[test]
    fn test_tech_terms_are_whole_words() {
        let parsed = parse_jd("A successful, trustworthy candidate to grow digital revenue");
        assert!(parsed.tech_terms.is_empty());

        // "javascript" is not "java", "reactive" is not "react", "mysql" is not "sql"
        let parsed = parse_jd("Reactive JavaScript and MySQL on scalable infra");
        assert_eq!(parsed.tech_terms, vec!["javascript"]);
    }

    #[test]
    fn test_multi_word_and_punctuated_terms() {
        let parsed = parse_jd("Machine learning engineer, CI/CD ownership, REST API design");
        assert_eq!(
            parsed.tech_terms,
            vec!["machine learning", "ci/cd", "rest api"]
        );
    }

    #[test]
    fn test_unique_phrases_drops_repeats() {
        let parsed = parse_jd("build pipelines build pipelines build pipelines");
        assert_eq!(parsed.phrases.len(), 5);
        let unique: Vec<&str> = parsed.unique_phrases().into_iter().collect();
        assert_eq!(unique, vec!["build pipelines", "pipelines build"]);
    }

    #[test]
    fn test_blank_jd_parses_to_empty_sets() {
        let parsed = parse_jd("   ");
        assert!(parsed.is_blank());
        assert!(parsed.keywords.is_empty());
        assert!(parsed.phrases.is_empty());
        assert!(parsed.tech_terms.is_empty());
    }

    #[test]
    fn test_parsed_jd_serializes_keywords_as_list() {
        let parsed = parse_jd("Rust engineer");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["keywords"], serde_json::json!(["rust", "engineer"]));
    }
}
