//! Candidate reservation and disposition engine.
//!
//! Governs how a candidate moves between availability states across
//! concurrent job requests: soft reservations (interest), the exclusive hard
//! reservation (scheduled interview), global exclusivity once selected, and
//! structured conflict reports when two jobs race for the same person.
//! Reject/decline reasons land on an append-only trail.

pub mod conflict;
pub mod domain;
pub mod ledger;
pub mod registry;
pub mod router;
pub mod service;
pub mod stats;
pub mod trail;

#[cfg(test)]
mod tests;

pub use conflict::{check_hard_reserve, ConflictCheck};
pub use domain::{
    valid_actions, Actor, Candidate, CandidateId, CandidateSnapshot, GlobalStatus,
    JobCandidateStatus, JobStatusView, RejectionType, TransitionAction,
};
pub use ledger::{ReservationConflict, ReservationLedger};
pub use registry::{CandidateRegistry, RegistryError};
pub use router::candidate_router;
pub use service::{CandidateDispositionService, TransitionError};
pub use stats::JobProcessingStats;
pub use trail::{Comment, CommentId, CommentLog};
