//! Project catalogue: the fixed, versioned table of project write-ups that the
//! ranker scores against each job description.
//!
//! Loaded once at startup (embedded JSON by default) and shared read-only.

use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const EMBEDDED_CATALOGUE: &str = include_str!("../../data/projects.json");

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalogue JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalogue contains no projects")]
    Empty,

    #[error("project #{0} has a blank title")]
    BlankTitle(usize),
}

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl ProjectEntry {
    /// Lower-cased "title description", the text job keywords are matched against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCatalogue {
    pub version: u32,
    pub projects: Vec<ProjectEntry>,
}

impl ProjectCatalogue {
    /// The catalogue compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::from_json(EMBEDDED_CATALOGUE)
    }

    /// Loads a replacement catalogue from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalogue = Self::from_json(&raw)?;
        info!(
            "Loaded project catalogue v{} ({} projects) from {}",
            catalogue.version,
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let ProjectCatalogue { version, projects } = serde_json::from_str(raw)?;
        Self::from_entries(version, projects)
    }

    /// Builds a catalogue from entries already in memory.
    pub fn from_entries(version: u32, projects: Vec<ProjectEntry>) -> Result<Self, CatalogueError> {
        let mut catalogue = ProjectCatalogue { version, projects };
        catalogue.normalize()?;
        Ok(catalogue)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Keywords become a lower-cased, trimmed set in first-seen order.
    fn normalize(&mut self) -> Result<(), CatalogueError> {
        if self.is_empty() {
            return Err(CatalogueError::Empty);
        }
        for (index, project) in self.projects.iter_mut().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogueError::BlankTitle(index));
            }
            project.keywords = project
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect::<IndexSet<String>>()
                .into_iter()
                .collect();
        }
        Ok(())
    }
}
