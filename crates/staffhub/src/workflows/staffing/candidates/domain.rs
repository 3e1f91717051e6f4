use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::trail::{Comment, CommentLog};
use crate::workflows::staffing::jobs::JobId;

/// Identifier wrapper for candidate profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who performed a transition. Identity is established by an upstream
/// authentication collaborator; the engine records it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor(pub String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The candidate's disposition across the entire org, independent of any
/// single job request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalStatus {
    Available,
    Interested,
    InterviewScheduled,
    /// Only appears on ingested records; `effective_global_status` maps a
    /// per-job selection straight to `NoLongerAvailable`.
    Selected,
    NoLongerAvailable,
}

impl GlobalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            GlobalStatus::Available => "available",
            GlobalStatus::Interested => "interested",
            GlobalStatus::InterviewScheduled => "interview_scheduled",
            GlobalStatus::Selected => "selected",
            GlobalStatus::NoLongerAvailable => "no_longer_available",
        }
    }
}

/// Which side closed the door when a per-job status lands in `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionType {
    ByCandidate,
    ByInterviewer,
}

impl RejectionType {
    pub const fn label(self) -> &'static str {
        match self {
            RejectionType::ByCandidate => "by_candidate",
            RejectionType::ByInterviewer => "by_interviewer",
        }
    }
}

/// Candidate status local to one specific job request.
///
/// A candidate decline is filed under `Rejected(ByCandidate)` rather than a
/// separate bucket, so the rejection type is present exactly when the status
/// is rejected. `Declined` survives as an ingestable terminal status for
/// records imported from systems that keep the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCandidateStatus {
    Available,
    Interested,
    InterviewScheduled,
    OfferExtended,
    Selected,
    Declined,
    Rejected(RejectionType),
}

impl JobCandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobCandidateStatus::Available => "available",
            JobCandidateStatus::Interested => "interested",
            JobCandidateStatus::InterviewScheduled => "interview_scheduled",
            JobCandidateStatus::OfferExtended => "offer_extended",
            JobCandidateStatus::Selected => "selected",
            JobCandidateStatus::Declined => "declined",
            JobCandidateStatus::Rejected(_) => "rejected",
        }
    }

    pub const fn rejection_type(self) -> Option<RejectionType> {
        match self {
            JobCandidateStatus::Rejected(by) => Some(by),
            _ => None,
        }
    }

    /// Terminal statuses accept no further transition for that job.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            JobCandidateStatus::Selected
                | JobCandidateStatus::Declined
                | JobCandidateStatus::Rejected(_)
        )
    }
}

/// A requested status change for a (candidate, job) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAction {
    Interested,
    InterviewScheduled,
    Selected,
    Declined,
    Rejected,
}

impl TransitionAction {
    pub const fn label(self) -> &'static str {
        match self {
            TransitionAction::Interested => "interested",
            TransitionAction::InterviewScheduled => "interview_scheduled",
            TransitionAction::Selected => "selected",
            TransitionAction::Declined => "declined",
            TransitionAction::Rejected => "rejected",
        }
    }

    /// Reject/decline must carry a non-empty free-text reason.
    pub const fn requires_reason(self) -> bool {
        matches!(self, TransitionAction::Rejected | TransitionAction::Declined)
    }
}

/// Outgoing edges of the per-job state machine, in the order the original
/// workflow offers them.
pub fn valid_actions(from: JobCandidateStatus) -> &'static [TransitionAction] {
    match from {
        JobCandidateStatus::Available => &[
            TransitionAction::Interested,
            TransitionAction::InterviewScheduled,
            TransitionAction::Rejected,
        ],
        JobCandidateStatus::Interested => &[
            TransitionAction::InterviewScheduled,
            TransitionAction::Declined,
            TransitionAction::Rejected,
        ],
        JobCandidateStatus::InterviewScheduled | JobCandidateStatus::OfferExtended => &[
            TransitionAction::Selected,
            TransitionAction::Declined,
            TransitionAction::Rejected,
        ],
        JobCandidateStatus::Selected
        | JobCandidateStatus::Declined
        | JobCandidateStatus::Rejected(_) => &[],
    }
}

/// A sourceable person. Created once by profile ingestion and shared across
/// every job request; the engine mutates dispositions and reservations and
/// appends comments, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u8,
    pub match_score: u8,
    pub availability_note: String,
    pub resume_url: Option<String>,
    pub global_status: GlobalStatus,
    pub per_job_status: BTreeMap<JobId, JobCandidateStatus>,
    /// Set exactly while one job holds the hard (interview) reservation.
    pub reserved_for_job: Option<JobId>,
    pub comments: CommentLog,
}

impl Candidate {
    /// A fresh, fully sourceable profile with no job history.
    pub fn new(id: CandidateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            skills: Vec::new(),
            experience_years: 0,
            match_score: 0,
            availability_note: String::new(),
            resume_url: None,
            global_status: GlobalStatus::Available,
            per_job_status: BTreeMap::new(),
            reserved_for_job: None,
            comments: CommentLog::default(),
        }
    }

    /// Per-job status, defaulting to `available` for jobs the candidate has
    /// never been touched by.
    pub fn status_for_job(&self, job: &JobId) -> JobCandidateStatus {
        self.per_job_status
            .get(job)
            .copied()
            .unwrap_or(JobCandidateStatus::Available)
    }

    /// Recompute the global status as the most committed disposition across
    /// all active per-job statuses.
    ///
    /// This is the single ranking seam: every transition calls it after
    /// mutating, so no call site carries its own precedence logic. Once the
    /// candidate is selected anywhere the result is pinned to
    /// `no_longer_available`.
    pub fn recompute_global_status(&mut self) {
        self.global_status = self.effective_global_status();
    }

    pub fn effective_global_status(&self) -> GlobalStatus {
        if self.global_status == GlobalStatus::NoLongerAvailable
            || self
                .per_job_status
                .values()
                .any(|status| *status == JobCandidateStatus::Selected)
        {
            return GlobalStatus::NoLongerAvailable;
        }

        if self.reserved_for_job.is_some()
            || self
                .per_job_status
                .values()
                .any(|status| *status == JobCandidateStatus::InterviewScheduled)
        {
            return GlobalStatus::InterviewScheduled;
        }

        let soft_interest = self.per_job_status.values().any(|status| {
            matches!(
                status,
                JobCandidateStatus::Interested | JobCandidateStatus::OfferExtended
            )
        });
        if soft_interest {
            return GlobalStatus::Interested;
        }

        GlobalStatus::Available
    }

    pub fn snapshot(&self) -> CandidateSnapshot {
        let per_job_status = self
            .per_job_status
            .iter()
            .map(|(job, status)| {
                (
                    job.clone(),
                    JobStatusView {
                        status: status.label(),
                        rejection_type: status.rejection_type(),
                        valid_actions: valid_actions(*status).to_vec(),
                    },
                )
            })
            .collect();

        CandidateSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            skills: self.skills.clone(),
            experience_years: self.experience_years,
            match_score: self.match_score,
            availability_note: self.availability_note.clone(),
            resume_url: self.resume_url.clone(),
            global_status: self.global_status,
            reserved_for_job: self.reserved_for_job.clone(),
            per_job_status,
            comments: self.comments.iter().cloned().collect(),
        }
    }
}

/// Flattened per-job status for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobStatusView {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_type: Option<RejectionType>,
    /// Outgoing edges the caller may offer for this job, in display order.
    pub valid_actions: Vec<TransitionAction>,
}

/// Consistent read-only view of a candidate, returned by every successful
/// transition and by `get_candidate_view`. Never exposes a half-applied
/// transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSnapshot {
    pub id: CandidateId,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u8,
    pub match_score: u8,
    pub availability_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub global_status: GlobalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_for_job: Option<JobId>,
    pub per_job_status: BTreeMap<JobId, JobStatusView>,
    pub comments: Vec<Comment>,
}

impl CandidateSnapshot {
    pub fn status_for_job(&self, job: &JobId) -> &'static str {
        self.per_job_status
            .get(job)
            .map(|view| view.status)
            .unwrap_or("available")
    }
}
