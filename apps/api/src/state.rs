use std::sync::Arc;

use crate::catalogue::ProjectCatalogue;
use crate::config::Config;
use crate::scoring::fit_scoring::{FitScorer, KeywordFitScorer};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup.
    pub catalogue: Arc<ProjectCatalogue>,
    /// Pluggable fit scorer. Default: KeywordFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, catalogue: ProjectCatalogue) -> Self {
        Self {
            config,
            catalogue: Arc::new(catalogue),
            fit_scorer: Arc::new(KeywordFitScorer),
            sessions: SessionStore::new(),
        }
    }
}
