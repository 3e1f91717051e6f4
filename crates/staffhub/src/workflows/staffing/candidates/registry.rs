//! Candidate storage seam.
//!
//! Every read and mutation of candidate state flows through this trait so
//! each change stays observable and the engine can be exercised against an
//! in-memory store in tests.

use super::domain::{Candidate, CandidateId};
use crate::workflows::staffing::jobs::JobId;

pub trait CandidateRegistry: Send + Sync {
    /// Store a freshly ingested candidate. Fails with `Conflict` if the id
    /// is already present.
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RegistryError>;

    /// Copy-on-read fetch; callers receive a consistent snapshot and never a
    /// half-applied transition.
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RegistryError>;

    /// Whole-record replace. Fails with `NotFound` if the candidate was
    /// never ingested.
    fn update(&self, candidate: Candidate) -> Result<(), RegistryError>;

    /// Candidates carrying any per-job status for the given job.
    fn for_job(&self, job: &JobId) -> Result<Vec<Candidate>, RegistryError>;
}

/// Error enumeration for registry failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("candidate already exists")]
    Conflict,
    #[error("candidate not found")]
    NotFound,
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}
