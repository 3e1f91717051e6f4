use clap::Args;
use staffhub::error::AppError;
use staffhub::workflows::staffing::candidates::{
    Actor, CandidateId, CandidateSnapshot, TransitionAction, TransitionError,
};
use staffhub::workflows::staffing::jobs::JobId;

use crate::infra::seeded_service;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Actor recorded against every transition in the walkthrough
    #[arg(long, default_value = "demo-pm")]
    pub(crate) actor: String,
}

fn print_state(step: &str, snapshot: &CandidateSnapshot) {
    println!("--- {step}");
    println!(
        "    global={} reserved_for={}",
        snapshot.global_status.label(),
        snapshot
            .reserved_for_job
            .as_ref()
            .map(|job| job.0.as_str())
            .unwrap_or("-")
    );
    for (job, view) in &snapshot.per_job_status {
        println!("    job {job}: {}", view.status);
    }
}

/// Walk the contended-candidate scenario end to end on seed data: job 1001
/// reserves, job 1002 is refused, the candidate declines, job 1002 succeeds.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = seeded_service();
    let actor = Actor::new(args.actor);
    let candidate = CandidateId::new("c1");
    let (j1, j2) = (JobId::new("1001"), JobId::new("1002"));

    println!("StaffHub reservation walkthrough (candidate c1, jobs 1001/1002)\n");

    let snapshot = service.request_transition(
        &candidate,
        &j1,
        TransitionAction::InterviewScheduled,
        None,
        &actor,
    )?;
    print_state("job 1001 schedules an interview (hard reserve)", &snapshot);

    match service.request_transition(
        &candidate,
        &j2,
        TransitionAction::InterviewScheduled,
        None,
        &actor,
    ) {
        Err(TransitionError::Conflict { held_by }) => {
            println!("--- job 1002 is refused: candidate already reserved by job {held_by}");
        }
        Ok(_) => println!("--- unexpected: job 1002 was able to double-book"),
        Err(other) => return Err(other.into()),
    }

    let snapshot = service.request_transition(
        &candidate,
        &j1,
        TransitionAction::Declined,
        Some("Accepted a different engagement"),
        &actor,
    )?;
    print_state("candidate declines job 1001 (slot released)", &snapshot);

    let snapshot = service.request_transition(
        &candidate,
        &j2,
        TransitionAction::InterviewScheduled,
        None,
        &actor,
    )?;
    print_state("job 1002 schedules after the release", &snapshot);

    let stats = service.job_stats(&j1)?;
    println!(
        "\njob 1001 pipeline: selected={} rejected_by_interviewer={} declined_by_candidate={} selection_rate={}%",
        stats.selected,
        stats.rejected_by_interviewer,
        stats.declined_by_candidate,
        stats.selection_rate
    );

    Ok(())
}
