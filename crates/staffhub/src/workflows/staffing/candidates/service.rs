use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::info;

use super::conflict::{check_hard_reserve, ConflictCheck};
use super::domain::{
    valid_actions, Actor, Candidate, CandidateId, CandidateSnapshot, JobCandidateStatus,
    RejectionType, TransitionAction,
};
use super::ledger::ReservationLedger;
use super::registry::{CandidateRegistry, RegistryError};
use super::stats::JobProcessingStats;
use super::trail::Comment;
use crate::workflows::staffing::jobs::{JobDirectory, JobDirectoryError, JobId};

/// Typed failure taxonomy for a transition request. Nothing here is
/// recovered internally, and no failure leaves partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("cannot apply '{}' from status '{}'", .action.label(), .from.label())]
    InvalidTransition {
        from: JobCandidateStatus,
        action: TransitionAction,
    },
    #[error("a non-empty reason is required for '{}'", .action.label())]
    MissingReason { action: TransitionAction },
    #[error("candidate already hard-reserved by job {held_by}")]
    Conflict { held_by: JobId },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Jobs(#[from] JobDirectoryError),
}

impl TransitionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            TransitionError::CandidateNotFound(_) | TransitionError::JobNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            TransitionError::Conflict { .. } => StatusCode::CONFLICT,
            TransitionError::InvalidTransition { .. } | TransitionError::MissingReason { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TransitionError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            TransitionError::Registry(_) | TransitionError::Jobs(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Per-candidate serialization so each transition applies as one atomic
/// unit: two jobs racing for the same candidate take turns, while distinct
/// candidates proceed fully in parallel.
///
/// Entries are never pruned; candidates are never deleted, so the table is
/// bounded by the candidate population.
#[derive(Default)]
struct CandidateLocks {
    locks: Mutex<HashMap<CandidateId, Arc<Mutex<()>>>>,
}

impl CandidateLocks {
    fn for_candidate(&self, id: &CandidateId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock table mutex poisoned");
        locks.entry(id.clone()).or_default().clone()
    }
}

/// The transition engine: validates a requested status change for a
/// (candidate, job) pair against the reservation ledger and registry, then
/// applies it and appends to the comment trail.
pub struct CandidateDispositionService<R, J> {
    registry: Arc<R>,
    jobs: Arc<J>,
    ledger: Arc<ReservationLedger>,
    locks: CandidateLocks,
}

impl<R, J> CandidateDispositionService<R, J>
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    pub fn new(registry: Arc<R>, jobs: Arc<J>) -> Self {
        Self {
            registry,
            jobs,
            ledger: Arc::new(ReservationLedger::new()),
            locks: CandidateLocks::default(),
        }
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Register a candidate coming from profile ingestion, seeding the
    /// ledger from any reservations already on the record.
    pub fn ingest(&self, candidate: Candidate) -> Result<CandidateSnapshot, TransitionError> {
        let stored = self.registry.insert(candidate)?;

        if let Some(job) = &stored.reserved_for_job {
            // Insert-time seeding; a live conflict here means the record
            // contradicts the single-hard-holder invariant.
            self.ledger
                .hard_reserve(&stored.id, job)
                .map_err(|conflict| TransitionError::Conflict {
                    held_by: conflict.held_by,
                })?;
        }
        for (job, status) in &stored.per_job_status {
            if *status == JobCandidateStatus::Interested {
                self.ledger.soft_reserve(&stored.id, job);
            }
        }

        Ok(stored.snapshot())
    }

    /// Validate and apply one disposition change.
    ///
    /// Validation (edge check, reason check, conflict check) runs before any
    /// mutation; the registry write lands before the infallible ledger
    /// updates, all while holding the candidate's lock, so a failed request
    /// leaves state exactly as it was.
    pub fn request_transition(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
        action: TransitionAction,
        reason: Option<&str>,
        actor: &Actor,
    ) -> Result<CandidateSnapshot, TransitionError> {
        self.jobs
            .fetch(job_id)?
            .ok_or_else(|| TransitionError::JobNotFound(job_id.clone()))?;

        let lock = self.locks.for_candidate(candidate_id);
        let _guard = lock.lock().expect("candidate lock poisoned");

        let mut candidate = self
            .registry
            .fetch(candidate_id)?
            .ok_or_else(|| TransitionError::CandidateNotFound(candidate_id.clone()))?;

        let from = candidate.status_for_job(job_id);
        if !valid_actions(from).contains(&action) {
            return Err(TransitionError::InvalidTransition { from, action });
        }

        let reason = reason.map(str::trim).filter(|reason| !reason.is_empty());
        if action.requires_reason() && reason.is_none() {
            return Err(TransitionError::MissingReason { action });
        }

        if action == TransitionAction::InterviewScheduled {
            if let ConflictCheck::Conflict { held_by } =
                check_hard_reserve(&self.ledger, candidate_id, job_id)
            {
                return Err(TransitionError::Conflict { held_by });
            }
        }

        let held_here = candidate.reserved_for_job.as_ref() == Some(job_id);
        match action {
            TransitionAction::Interested => {
                candidate
                    .per_job_status
                    .insert(job_id.clone(), JobCandidateStatus::Interested);
            }
            TransitionAction::InterviewScheduled => {
                candidate
                    .per_job_status
                    .insert(job_id.clone(), JobCandidateStatus::InterviewScheduled);
                candidate.reserved_for_job = Some(job_id.clone());
            }
            TransitionAction::Selected => {
                candidate
                    .per_job_status
                    .insert(job_id.clone(), JobCandidateStatus::Selected);
                candidate.reserved_for_job = None;
            }
            TransitionAction::Rejected | TransitionAction::Declined => {
                let by = if action == TransitionAction::Declined {
                    RejectionType::ByCandidate
                } else {
                    RejectionType::ByInterviewer
                };
                candidate
                    .per_job_status
                    .insert(job_id.clone(), JobCandidateStatus::Rejected(by));
                if held_here {
                    candidate.reserved_for_job = None;
                }
                let reason = reason.unwrap_or_default();
                candidate.comments.append(Comment::new(
                    candidate_id.clone(),
                    job_id.clone(),
                    action,
                    reason,
                    actor.clone(),
                ));
            }
        }

        candidate.recompute_global_status();
        self.registry.update(candidate.clone())?;

        // Ledger updates are infallible here: the conflict path was ruled
        // out above and this candidate's reservations only change under the
        // lock we are holding.
        match action {
            TransitionAction::Interested => {
                self.ledger.soft_reserve(candidate_id, job_id);
            }
            TransitionAction::InterviewScheduled => {
                self.ledger
                    .hard_reserve(candidate_id, job_id)
                    .map_err(|conflict| TransitionError::Conflict {
                        held_by: conflict.held_by,
                    })?;
                self.ledger.clear_soft(candidate_id, job_id);
            }
            TransitionAction::Selected => {
                self.ledger.release_hard(candidate_id);
                self.ledger.clear_soft(candidate_id, job_id);
            }
            TransitionAction::Rejected | TransitionAction::Declined => {
                if held_here {
                    self.ledger.release_hard(candidate_id);
                }
                self.ledger.clear_soft(candidate_id, job_id);
            }
        }

        info!(
            candidate = %candidate_id,
            job = %job_id,
            action = action.label(),
            from = from.label(),
            global = candidate.global_status.label(),
            "candidate disposition updated"
        );

        Ok(candidate.snapshot())
    }

    /// Consistent read-only view of one candidate.
    pub fn get_candidate_view(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<CandidateSnapshot, TransitionError> {
        let candidate = self
            .registry
            .fetch(candidate_id)?
            .ok_or_else(|| TransitionError::CandidateNotFound(candidate_id.clone()))?;
        Ok(candidate.snapshot())
    }

    /// Candidates attached to a job, for listing views.
    pub fn candidates_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<CandidateSnapshot>, TransitionError> {
        self.jobs
            .fetch(job_id)?
            .ok_or_else(|| TransitionError::JobNotFound(job_id.clone()))?;
        let candidates = self.registry.for_job(job_id)?;
        Ok(candidates
            .iter()
            .map(Candidate::snapshot)
            .collect())
    }

    /// Processing rollup for a job's candidate pipeline.
    pub fn job_stats(&self, job_id: &JobId) -> Result<JobProcessingStats, TransitionError> {
        self.jobs
            .fetch(job_id)?
            .ok_or_else(|| TransitionError::JobNotFound(job_id.clone()))?;
        let candidates = self.registry.for_job(job_id)?;
        Ok(JobProcessingStats::for_job(job_id, &candidates))
    }
}
