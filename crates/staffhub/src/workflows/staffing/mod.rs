//! Staffing workflows: job requests and the candidates attached to them.

pub mod candidates;
pub mod jobs;
