//! Append-only trail of reject/decline reasons.
//!
//! Comments exist for dispute resolution, so the log supports append and
//! filtered listing only. There is deliberately no update or delete.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Actor, CandidateId, TransitionAction};
use crate::workflows::staffing::jobs::JobId;

/// Identifier wrapper for trail comments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

static COMMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_comment_id() -> CommentId {
    let id = COMMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CommentId(format!("cmt-{id:06}"))
}

/// One reason record, produced only by a `rejected` or `declined` transition.
/// Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub candidate_id: CandidateId,
    pub job_id: JobId,
    pub action: TransitionAction,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
    pub performed_by: Actor,
}

impl Comment {
    pub fn new(
        candidate_id: CandidateId,
        job_id: JobId,
        action: TransitionAction,
        reason: impl Into<String>,
        performed_by: Actor,
    ) -> Self {
        Self {
            id: next_comment_id(),
            candidate_id,
            job_id,
            action,
            reason: reason.into(),
            timestamp: Utc::now(),
            performed_by,
        }
    }
}

/// Chronological, append-only comment sequence stored on a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentLog(Vec<Comment>);

impl CommentLog {
    /// Append a comment, clamping the timestamp so the sequence stays
    /// monotonically non-decreasing even across clock slew.
    pub fn append(&mut self, mut comment: Comment) {
        if let Some(last) = self.0.last() {
            if comment.timestamp < last.timestamp {
                comment.timestamp = last.timestamp;
            }
        }
        self.0.push(comment);
    }

    /// The full sequence, optionally filtered to a single job.
    pub fn list_for(&self, job: Option<&JobId>) -> Vec<&Comment> {
        self.0
            .iter()
            .filter(|comment| job.map_or(true, |job| &comment.job_id == job))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
