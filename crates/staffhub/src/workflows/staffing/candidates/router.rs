use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Actor, CandidateId, TransitionAction};
use super::registry::CandidateRegistry;
use super::service::{CandidateDispositionService, TransitionError};
use crate::workflows::staffing::jobs::{JobDirectory, JobId};

/// Router builder exposing the two core operations plus job-side listings.
pub fn candidate_router<R, J>(service: Arc<CandidateDispositionService<R, J>>) -> Router
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates/:candidate_id/transitions",
            post(transition_handler::<R, J>),
        )
        .route(
            "/api/v1/candidates/:candidate_id",
            get(candidate_handler::<R, J>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates",
            get(job_candidates_handler::<R, J>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/stats",
            get(job_stats_handler::<R, J>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequestBody {
    pub job_id: String,
    pub action: TransitionAction,
    #[serde(default)]
    pub reason: Option<String>,
    pub performed_by: String,
}

fn error_response(error: TransitionError) -> Response {
    let status = error.status_code();
    let payload = match &error {
        TransitionError::Conflict { held_by } => json!({
            "error": error.to_string(),
            "held_by": held_by,
        }),
        _ => json!({ "error": error.to_string() }),
    };
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn transition_handler<R, J>(
    State(service): State<Arc<CandidateDispositionService<R, J>>>,
    Path(candidate_id): Path<String>,
    axum::Json(body): axum::Json<TransitionRequestBody>,
) -> Response
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    let candidate_id = CandidateId(candidate_id);
    let job_id = JobId(body.job_id);
    let actor = Actor(body.performed_by);

    match service.request_transition(
        &candidate_id,
        &job_id,
        body.action,
        body.reason.as_deref(),
        &actor,
    ) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidate_handler<R, J>(
    State(service): State<Arc<CandidateDispositionService<R, J>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    let candidate_id = CandidateId(candidate_id);
    match service.get_candidate_view(&candidate_id) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_candidates_handler<R, J>(
    State(service): State<Arc<CandidateDispositionService<R, J>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    let job_id = JobId(job_id);
    match service.candidates_for_job(&job_id) {
        Ok(candidates) => {
            let payload = json!({
                "job_id": job_id,
                "candidates": candidates,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_stats_handler<R, J>(
    State(service): State<Arc<CandidateDispositionService<R, J>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: CandidateRegistry + 'static,
    J: JobDirectory + 'static,
{
    let job_id = JobId(job_id);
    match service.job_stats(&job_id) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}
