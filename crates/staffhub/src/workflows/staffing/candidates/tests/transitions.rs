use super::common::*;
use crate::workflows::staffing::candidates::domain::{
    valid_actions, GlobalStatus, JobCandidateStatus, RejectionType, TransitionAction,
};
use crate::workflows::staffing::candidates::service::TransitionError;
use crate::workflows::staffing::candidates::CandidateId;
use crate::workflows::staffing::jobs::JobId;

#[test]
fn interested_records_soft_reservation() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");

    let snapshot = service
        .request_transition(
            &CandidateId::new("c1"),
            &job("1001"),
            TransitionAction::Interested,
            None,
            &recruiter(),
        )
        .expect("interested succeeds");

    assert_eq!(snapshot.global_status, GlobalStatus::Interested);
    assert_eq!(snapshot.status_for_job(&job("1001")), "interested");
    assert!(snapshot.reserved_for_job.is_none());
    assert_eq!(
        service.ledger().soft_holders(&CandidateId::new("c1")),
        vec![job("1001")]
    );
}

#[test]
fn interview_scheduled_hard_reserves_for_the_job() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");

    let snapshot = service
        .request_transition(
            &CandidateId::new("c1"),
            &job("1001"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("schedule succeeds");

    assert_eq!(snapshot.global_status, GlobalStatus::InterviewScheduled);
    assert_eq!(snapshot.reserved_for_job, Some(job("1001")));
    assert_eq!(
        service.ledger().hard_holder(&CandidateId::new("c1")),
        Some(job("1001"))
    );
}

#[test]
fn selected_makes_candidate_globally_unavailable() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

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

    assert_eq!(snapshot.global_status, GlobalStatus::NoLongerAvailable);
    assert_eq!(snapshot.status_for_job(&job("1001")), "selected");
    assert!(snapshot.reserved_for_job.is_none());
    assert!(service.ledger().hard_holder(&id).is_none());
}

#[test]
fn no_longer_available_is_sticky_across_other_jobs() {
    let service = service_with_jobs(&["1001", "1002"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

    service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("schedule");
    service
        .request_transition(&id, &job("1001"), TransitionAction::Selected, None, &recruiter())
        .expect("select");

    // A later soft mark on another job does not resurrect availability.
    let snapshot = service
        .request_transition(&id, &job("1002"), TransitionAction::Interested, None, &recruiter())
        .expect("interested on other job");
    assert_eq!(snapshot.global_status, GlobalStatus::NoLongerAvailable);
}

#[test]
fn rejection_without_reason_is_a_state_free_failure() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");
    let before = service.get_candidate_view(&id).expect("view");

    for reason in [None, Some(""), Some("   ")] {
        match service.request_transition(
            &id,
            &job("1001"),
            TransitionAction::Rejected,
            reason,
            &recruiter(),
        ) {
            Err(TransitionError::MissingReason {
                action: TransitionAction::Rejected,
            }) => {}
            other => panic!("expected missing reason, got {other:?}"),
        }
    }

    let after = service.get_candidate_view(&id).expect("view");
    assert_eq!(before, after, "failed request must not mutate state");
}

#[test]
fn rejected_keeps_candidate_sourceable_elsewhere() {
    let service = service_with_jobs(&["1001", "1002"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

    let snapshot = service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Rejected,
            Some("Does not meet technical requirements"),
            &recruiter(),
        )
        .expect("reject");

    assert_eq!(snapshot.status_for_job(&job("1001")), "rejected");
    assert_eq!(
        snapshot.per_job_status[&job("1001")].rejection_type,
        Some(RejectionType::ByInterviewer)
    );
    assert_eq!(snapshot.global_status, GlobalStatus::Available);

    service
        .request_transition(
            &id,
            &job("1002"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("still schedulable on another job");
}

#[test]
fn rejection_leaves_another_jobs_hard_hold_intact() {
    let service = service_with_jobs(&["1001", "1002"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

    service
        .request_transition(
            &id,
            &job("1002"),
            TransitionAction::InterviewScheduled,
            None,
            &recruiter(),
        )
        .expect("schedule on 1002");
    let snapshot = service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Rejected,
            Some("Does not meet technical requirements"),
            &recruiter(),
        )
        .expect("reject on 1001");

    assert_eq!(snapshot.status_for_job(&job("1001")), "rejected");
    assert_eq!(snapshot.status_for_job(&job("1002")), "interview_scheduled");
    assert_eq!(snapshot.reserved_for_job, Some(job("1002")));
    assert_eq!(service.ledger().hard_holder(&id), Some(job("1002")));
    assert_eq!(snapshot.global_status, GlobalStatus::InterviewScheduled);
}

#[test]
fn rejecting_the_reserving_job_releases_its_own_hold() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

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
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Rejected,
            Some("Interview went poorly"),
            &recruiter(),
        )
        .expect("reject");

    assert!(snapshot.reserved_for_job.is_none());
    assert!(service.ledger().hard_holder(&id).is_none());
    assert_eq!(snapshot.global_status, GlobalStatus::Available);
}

#[test]
fn declined_files_as_rejected_by_candidate_and_reopens_globally() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c6", "Lisa Zhang")).expect("ingest");
    let id = CandidateId::new("c6");

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
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Declined,
            Some("Found another opportunity"),
            &recruiter(),
        )
        .expect("decline");

    assert_eq!(snapshot.status_for_job(&job("1001")), "rejected");
    assert_eq!(
        snapshot.per_job_status[&job("1001")].rejection_type,
        Some(RejectionType::ByCandidate)
    );
    assert_eq!(snapshot.global_status, GlobalStatus::Available);
    assert!(snapshot.reserved_for_job.is_none());
}

#[test]
fn terminal_statuses_accept_no_further_transition() {
    let service = service_with_jobs(&["1001"]);
    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    let id = CandidateId::new("c1");

    service
        .request_transition(
            &id,
            &job("1001"),
            TransitionAction::Rejected,
            Some("Not a fit"),
            &recruiter(),
        )
        .expect("reject");

    match service.request_transition(
        &id,
        &job("1001"),
        TransitionAction::Interested,
        None,
        &recruiter(),
    ) {
        Err(TransitionError::InvalidTransition {
            from: JobCandidateStatus::Rejected(RejectionType::ByInterviewer),
            action: TransitionAction::Interested,
        }) => {}
        other => panic!("expected invalid transition, got {other:?}"),
    }
}

#[test]
fn unknown_candidate_and_job_fail_with_not_found() {
    let service = service_with_jobs(&["1001"]);

    match service.request_transition(
        &CandidateId::new("ghost"),
        &job("1001"),
        TransitionAction::Interested,
        None,
        &recruiter(),
    ) {
        Err(TransitionError::CandidateNotFound(id)) => assert_eq!(id, CandidateId::new("ghost")),
        other => panic!("expected candidate not found, got {other:?}"),
    }

    service.ingest(candidate("c1", "John Smith")).expect("ingest");
    match service.request_transition(
        &CandidateId::new("c1"),
        &JobId::new("9999"),
        TransitionAction::Interested,
        None,
        &recruiter(),
    ) {
        Err(TransitionError::JobNotFound(id)) => assert_eq!(id, JobId::new("9999")),
        other => panic!("expected job not found, got {other:?}"),
    }
}

#[test]
fn edge_table_matches_the_workflow_sections() {
    assert_eq!(
        valid_actions(JobCandidateStatus::Available),
        &[
            TransitionAction::Interested,
            TransitionAction::InterviewScheduled,
            TransitionAction::Rejected,
        ]
    );
    assert_eq!(
        valid_actions(JobCandidateStatus::Interested),
        &[
            TransitionAction::InterviewScheduled,
            TransitionAction::Declined,
            TransitionAction::Rejected,
        ]
    );
    assert_eq!(
        valid_actions(JobCandidateStatus::InterviewScheduled),
        &[
            TransitionAction::Selected,
            TransitionAction::Declined,
            TransitionAction::Rejected,
        ]
    );
    assert!(valid_actions(JobCandidateStatus::Selected).is_empty());
    assert!(valid_actions(JobCandidateStatus::Rejected(RejectionType::ByCandidate)).is_empty());
    assert!(valid_actions(JobCandidateStatus::Declined).is_empty());
}
