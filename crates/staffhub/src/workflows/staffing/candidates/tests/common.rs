use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::staffing::candidates::domain::{Actor, Candidate, CandidateId};
use crate::workflows::staffing::candidates::registry::{CandidateRegistry, RegistryError};
use crate::workflows::staffing::candidates::service::CandidateDispositionService;
use crate::workflows::staffing::jobs::{
    JobDirectory, JobDirectoryError, JobId, JobStatus, JobSummary,
};

#[derive(Default)]
pub(crate) struct MemoryRegistry {
    records: Mutex<HashMap<CandidateId, Candidate>>,
}

impl CandidateRegistry for MemoryRegistry {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RegistryError> {
        let mut guard = self.records.lock().expect("registry mutex poisoned");
        if guard.contains_key(&candidate.id) {
            return Err(RegistryError::Conflict);
        }
        guard.insert(candidate.id.clone(), candidate.clone());
        Ok(candidate)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RegistryError> {
        let guard = self.records.lock().expect("registry mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(&self, candidate: Candidate) -> Result<(), RegistryError> {
        let mut guard = self.records.lock().expect("registry mutex poisoned");
        if guard.contains_key(&candidate.id) {
            guard.insert(candidate.id.clone(), candidate);
            Ok(())
        } else {
            Err(RegistryError::NotFound)
        }
    }

    fn for_job(&self, job: &JobId) -> Result<Vec<Candidate>, RegistryError> {
        let guard = self.records.lock().expect("registry mutex poisoned");
        Ok(guard
            .values()
            .filter(|candidate| candidate.per_job_status.contains_key(job))
            .cloned()
            .collect())
    }
}

pub(crate) struct MemoryJobs {
    jobs: Vec<JobSummary>,
}

impl MemoryJobs {
    pub(crate) fn with_jobs(ids: &[&str]) -> Self {
        Self {
            jobs: ids
                .iter()
                .map(|id| JobSummary {
                    id: JobId::new(*id),
                    project_name: format!("Project {id}"),
                    role: "Engineer".to_string(),
                    status: JobStatus::Open,
                })
                .collect(),
        }
    }
}

impl JobDirectory for MemoryJobs {
    fn fetch(&self, id: &JobId) -> Result<Option<JobSummary>, JobDirectoryError> {
        Ok(self.jobs.iter().find(|job| &job.id == id).cloned())
    }
}

pub(crate) type TestService = CandidateDispositionService<MemoryRegistry, MemoryJobs>;

pub(crate) fn service_with_jobs(jobs: &[&str]) -> Arc<TestService> {
    Arc::new(CandidateDispositionService::new(
        Arc::new(MemoryRegistry::default()),
        Arc::new(MemoryJobs::with_jobs(jobs)),
    ))
}

pub(crate) fn candidate(id: &str, name: &str) -> Candidate {
    let mut candidate = Candidate::new(CandidateId::new(id), name);
    candidate.skills = vec!["Java".to_string(), "Spring Boot".to_string()];
    candidate.experience_years = 5;
    candidate.match_score = 90;
    candidate.availability_note = "Available immediately".to_string();
    candidate
}

pub(crate) fn recruiter() -> Actor {
    Actor::new("pm-jane")
}

pub(crate) fn job(id: &str) -> JobId {
    JobId::new(id)
}
