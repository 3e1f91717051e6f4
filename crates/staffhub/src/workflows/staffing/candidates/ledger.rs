//! Reservation bookkeeping shared by every job-candidates view.
//!
//! One hard (interview) reservation per candidate at most; any number of
//! soft (interest) marks. The ledger answers conflict checks and is mutated
//! only by the transition engine while it holds the candidate's lock.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use super::domain::CandidateId;
use crate::workflows::staffing::jobs::JobId;

/// Returned when a different job already hard-holds the candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("candidate already hard-reserved by job {held_by}")]
pub struct ReservationConflict {
    pub held_by: JobId,
}

#[derive(Debug, Default)]
struct LedgerState {
    hard: HashMap<CandidateId, JobId>,
    soft: HashMap<CandidateId, BTreeSet<JobId>>,
}

/// Shared reservation ledger. Interior mutability so it can sit behind an
/// `Arc` next to the registry.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    state: Mutex<LedgerState>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the exclusive interview slot for `job`. Re-reserving by the
    /// current holder is a no-op success; any other holder is a conflict.
    pub fn hard_reserve(
        &self,
        candidate: &CandidateId,
        job: &JobId,
    ) -> Result<(), ReservationConflict> {
        let mut state = self.state.lock().expect("ledger mutex poisoned");
        match state.hard.get(candidate) {
            Some(holder) if holder != job => Err(ReservationConflict {
                held_by: holder.clone(),
            }),
            _ => {
                state.hard.insert(candidate.clone(), job.clone());
                Ok(())
            }
        }
    }

    /// Unconditionally clear the hard reservation (decline, reject,
    /// selection).
    pub fn release_hard(&self, candidate: &CandidateId) {
        let mut state = self.state.lock().expect("ledger mutex poisoned");
        state.hard.remove(candidate);
    }

    /// Record non-exclusive interest; never conflicts.
    pub fn soft_reserve(&self, candidate: &CandidateId, job: &JobId) {
        let mut state = self.state.lock().expect("ledger mutex poisoned");
        state
            .soft
            .entry(candidate.clone())
            .or_default()
            .insert(job.clone());
    }

    pub fn clear_soft(&self, candidate: &CandidateId, job: &JobId) {
        let mut state = self.state.lock().expect("ledger mutex poisoned");
        if let Some(jobs) = state.soft.get_mut(candidate) {
            jobs.remove(job);
            if jobs.is_empty() {
                state.soft.remove(candidate);
            }
        }
    }

    pub fn hard_holder(&self, candidate: &CandidateId) -> Option<JobId> {
        let state = self.state.lock().expect("ledger mutex poisoned");
        state.hard.get(candidate).cloned()
    }

    pub fn soft_holders(&self, candidate: &CandidateId) -> Vec<JobId> {
        let state = self.state.lock().expect("ledger mutex poisoned");
        state
            .soft
            .get(candidate)
            .map(|jobs| jobs.iter().cloned().collect())
            .unwrap_or_default()
    }
}
