//! Cross-job hard-reservation conflict detection.
//!
//! Pure check over the ledger: nothing is mutated here. When a conflict is
//! found the holding job id is surfaced so the caller can offer resolution
//! (navigation, escalation) on its side.

use super::domain::CandidateId;
use super::ledger::ReservationLedger;
use crate::workflows::staffing::jobs::JobId;

/// Outcome of a pre-transition conflict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictCheck {
    Clear,
    Conflict { held_by: JobId },
}

/// A conflict exists iff a *different* job currently hard-holds the
/// candidate. The requesting job re-checking its own reservation is clear.
pub fn check_hard_reserve(
    ledger: &ReservationLedger,
    candidate: &CandidateId,
    job: &JobId,
) -> ConflictCheck {
    match ledger.hard_holder(candidate) {
        Some(holder) if &holder != job => ConflictCheck::Conflict { held_by: holder },
        _ => ConflictCheck::Clear,
    }
}
