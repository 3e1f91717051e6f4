//! Candidate reservation and disposition engine for staffing job requests.
//!
//! The heart of the crate is [`workflows::staffing::candidates`]: a
//! per-(candidate, job) state machine with soft and hard reservation
//! semantics, global exclusivity once a candidate is selected, and an
//! append-only trail of rejection/decline reasons.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
