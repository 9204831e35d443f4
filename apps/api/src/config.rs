use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::ScoringConfig;

/// Application configuration loaded from environment variables.
/// Every key is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Replaces the embedded project catalogue when set.
    pub catalogue_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoringConfig::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalogue_path: lookup("PROJECT_CATALOGUE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            scoring: ScoringConfig {
                recommendation_threshold: parse_or(
                    &lookup,
                    "RECOMMENDATION_THRESHOLD",
                    defaults.recommendation_threshold,
                )?,
                phrase_match_threshold: parse_or(
                    &lookup,
                    "PHRASE_MATCH_THRESHOLD",
                    defaults.phrase_match_threshold,
                )?,
                min_action_verbs: parse_or(&lookup, "MIN_ACTION_VERBS", defaults.min_action_verbs)?,
                min_missing_keywords: parse_or(
                    &lookup,
                    "MIN_MISSING_KEYWORDS",
                    defaults.min_missing_keywords,
                )?,
                top_projects: parse_or(&lookup, "TOP_PROJECTS", defaults.top_projects)?,
                ..defaults
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
