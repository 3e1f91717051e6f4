//! Per-job processing rollup backing the pipeline overview card.

use serde::Serialize;

use super::domain::{Candidate, JobCandidateStatus, RejectionType};
use crate::workflows::staffing::jobs::JobId;

/// Counts of how a job's candidate pipeline resolved so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobProcessingStats {
    pub job_id: JobId,
    pub selected: usize,
    pub rejected_by_interviewer: usize,
    pub declined_by_candidate: usize,
    pub total_processed: usize,
    /// Selected share of processed candidates, as a rounded percentage.
    /// Zero when nothing has been processed yet.
    pub selection_rate: u8,
}

impl JobProcessingStats {
    pub fn for_job(job_id: &JobId, candidates: &[Candidate]) -> Self {
        let mut selected = 0usize;
        let mut rejected_by_interviewer = 0usize;
        let mut declined_by_candidate = 0usize;

        for candidate in candidates {
            match candidate.status_for_job(job_id) {
                JobCandidateStatus::Selected => selected += 1,
                JobCandidateStatus::Rejected(RejectionType::ByInterviewer) => {
                    rejected_by_interviewer += 1;
                }
                JobCandidateStatus::Rejected(RejectionType::ByCandidate)
                | JobCandidateStatus::Declined => declined_by_candidate += 1,
                _ => {}
            }
        }

        let total_processed = selected + rejected_by_interviewer + declined_by_candidate;
        let selection_rate = if total_processed > 0 {
            ((selected as f64 / total_processed as f64) * 100.0).round() as u8
        } else {
            0
        };

        Self {
            job_id: job_id.clone(),
            selected,
            rejected_by_interviewer,
            declined_by_candidate,
            total_processed,
            selection_rate,
        }
    }
}
