//! In-memory editing sessions.
//!
//! Holds the form data and the most recent analysis for each editing session.
//! Nothing survives a restart. The scoring engine never sees this store; handlers
//! read a snapshot, score it, and write the report back.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::scoring::analysis::AtsReport;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Resume in session {0} changed while it was being scored")]
    StaleRevision(Uuid),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::NotFound(err.to_string()),
            SessionError::StaleRevision(_) => AppError::Conflict(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub resume: Option<ResumeData>,
    /// Bumped on every résumé save; a report is only recorded against the revision it scored.
    pub revision: u64,
    pub last_job_description: Option<String>,
    pub last_report: Option<AtsReport>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new(resume: Option<ResumeData>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            resume,
            revision: 0,
            last_job_description: None,
            last_report: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Cheap to clone; all clones share the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, resume: Option<ResumeData>) -> Session {
        let session = Session::new(resume);
        self.inner.write().await.insert(session.id, session.clone());
        debug!("Created session {}", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Replaces the form data. The previous report no longer describes it, so it is dropped.
    pub async fn save_resume(&self, id: Uuid, resume: ResumeData) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        session.resume = Some(resume);
        session.revision += 1;
        session.last_report = None;
        session.last_job_description = None;
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    /// Stores a report scored from the résumé at `revision`. Rejected if the résumé
    /// has been saved again since.
    pub async fn record_report(
        &self,
        id: Uuid,
        revision: u64,
        jd_text: String,
        report: AtsReport,
    ) -> Result<Session, SessionError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if session.revision != revision {
            return Err(SessionError::StaleRevision(id));
        }
        session.last_job_description = Some(jd_text);
        session.last_report = Some(report);
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
