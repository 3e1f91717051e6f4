//! Read-only job request metadata.
//!
//! Job records are owned by the request-intake side of the platform; the
//! candidate engine only looks jobs up to validate transition targets and to
//! label conflicts. Nothing here writes job state back.

use serde::{Deserialize, Serialize};

/// Identifier wrapper for job requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a job request, owned upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    InProgress,
    Fulfilled,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::InProgress => "in_progress",
            JobStatus::Fulfilled => "fulfilled",
        }
    }
}

/// Minimal job snapshot consumed by the candidate engine and API views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub project_name: String,
    pub role: String,
    pub status: JobStatus,
}

/// Lookup seam for job metadata so the engine can be exercised in isolation.
pub trait JobDirectory: Send + Sync {
    fn fetch(&self, id: &JobId) -> Result<Option<JobSummary>, JobDirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobDirectoryError {
    #[error("job directory unavailable: {0}")]
    Unavailable(String),
}
