use chrono::{Duration, Utc};

use super::common::*;
use crate::workflows::staffing::candidates::domain::{Actor, CandidateId, TransitionAction};
use crate::workflows::staffing::candidates::trail::{Comment, CommentLog};

fn comment(job_id: &str, reason: &str) -> Comment {
    Comment::new(
        CandidateId::new("c1"),
        job(job_id),
        TransitionAction::Rejected,
        reason,
        Actor::new("pm-jane"),
    )
}

#[test]
fn append_clamps_timestamps_to_stay_monotonic() {
    let mut log = CommentLog::default();

    let mut first = comment("1001", "first");
    first.timestamp = Utc::now();
    let mut second = comment("1001", "second");
    // Simulate clock slew: the second comment claims an earlier instant.
    second.timestamp = first.timestamp - Duration::seconds(30);

    log.append(first.clone());
    log.append(second);

    let comments = log.list_for(None);
    assert_eq!(comments.len(), 2);
    assert!(comments[1].timestamp >= comments[0].timestamp);
    assert_eq!(comments[1].reason, "second");
}

#[test]
fn list_for_filters_by_job() {
    let mut log = CommentLog::default();
    log.append(comment("1001", "too junior"));
    log.append(comment("1002", "declined offer"));
    log.append(comment("1001", "follow-up"));

    assert_eq!(log.list_for(None).len(), 3);
    let for_job = log.list_for(Some(&job("1001")));
    assert_eq!(for_job.len(), 2);
    assert!(for_job.iter().all(|comment| comment.job_id == job("1001")));
}

#[test]
fn comment_ids_are_unique() {
    let a = comment("1001", "a");
    let b = comment("1001", "b");
    assert_ne!(a.id, b.id);
}

#[test]
fn only_reject_and_decline_produce_comments() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

    service
        .request_transition(&id, &job("1001"), TransitionAction::Interested, None, &recruiter())
        .expect("interested");
    service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("schedule");
    let snapshot = service
        .request_transition(&id, &job("1001"), TransitionAction::Selected, None, &recruiter())
        .expect("select");
    assert!(snapshot.comments.is_empty());
}

#[test]
fn decline_round_trip_appends_exactly_one_comment() {
    let service = service_with_jobs(&["1001", "1002"]);
    service.ingest(candidate("c6", "Lisa Zhang")).expect("ingest");
    let id = CandidateId::new("c6");

    service
        .request_transition(&id, &job("1001"), TransitionAction::Interested, None, &recruiter())
        .expect("interested");
    service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Declined,
            Some("Found another opportunity with better compensation"),
            &recruiter(),
        )
        .expect("decline");

    let snapshot = service.get_candidate_view(&id).expect("view");
    let for_job: Vec<_> = snapshot
        .comments
        .iter()
        .filter(|comment| comment.job_id == job("1001"))
        .collect();
    assert_eq!(for_job.len(), 1);
    assert_eq!(for_job[0].action, TransitionAction::Declined);
    assert_eq!(for_job[0].performed_by, recruiter());

    // Terminal for job 1001, but still eligible elsewhere.
    service
        .request_transition(&id, &job("1002"), TransitionAction::Interested, None, &recruiter())
        .expect("interested elsewhere");
    service
        .request_transition(
            &id,
            &job("1002"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("schedulable elsewhere");
}
