use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use staffhub::workflows::staffing::candidates::{
    Actor, Candidate, CandidateDispositionService, CandidateId, CandidateRegistry, Comment,
    JobCandidateStatus, RegistryError, RejectionType, TransitionAction,
};
use staffhub::workflows::staffing::jobs::{
    JobDirectory, JobDirectoryError, JobId, JobStatus, JobSummary,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRegistry {
    records: Arc<Mutex<HashMap<CandidateId, Candidate>>>,
}

impl CandidateRegistry for InMemoryCandidateRegistry {
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
        let mut candidates: Vec<Candidate> = guard
            .values()
            .filter(|candidate| candidate.per_job_status.contains_key(job))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(candidates)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobDirectory {
    jobs: Arc<Mutex<HashMap<JobId, JobSummary>>>,
}

impl InMemoryJobDirectory {
    pub(crate) fn insert(&self, job: JobSummary) {
        let mut guard = self.jobs.lock().expect("job directory mutex poisoned");
        guard.insert(job.id.clone(), job);
    }
}

impl JobDirectory for InMemoryJobDirectory {
    fn fetch(&self, id: &JobId) -> Result<Option<JobSummary>, JobDirectoryError> {
        let guard = self.jobs.lock().expect("job directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) type StaffingService =
    CandidateDispositionService<InMemoryCandidateRegistry, InMemoryJobDirectory>;

struct SeedProfile {
    id: &'static str,
    name: &'static str,
    skills: &'static [&'static str],
    experience_years: u8,
    match_score: u8,
    availability: &'static str,
    job: &'static str,
    status: JobCandidateStatus,
    reserved: bool,
    comment: Option<(&'static str, TransitionAction, &'static str)>,
}

fn seed_profiles() -> Vec<SeedProfile> {
    use JobCandidateStatus::*;
    vec![
        SeedProfile {
            id: "c1",
            name: "John Smith",
            skills: &["Java", "Spring Boot", "AWS"],
            experience_years: 5,
            match_score: 95,
            availability: "Available immediately",
            job: "1001",
            status: Available,
            reserved: false,
            comment: None,
        },
        SeedProfile {
            id: "c2",
            name: "Sarah Johnson",
            skills: &["Java", "Microservices", "Docker"],
            experience_years: 7,
            match_score: 88,
            availability: "2 weeks notice",
            job: "1001",
            status: Interested,
            reserved: false,
            comment: None,
        },
        SeedProfile {
            id: "c3",
            name: "Mike Chen",
            skills: &["Java", "Spring", "MySQL"],
            experience_years: 4,
            match_score: 82,
            availability: "Available in 1 month",
            job: "1001",
            status: InterviewScheduled,
            reserved: true,
            comment: None,
        },
        SeedProfile {
            id: "c4",
            name: "Emma Wilson",
            skills: &["Java", "REST APIs", "AWS"],
            experience_years: 6,
            match_score: 90,
            availability: "Available immediately",
            job: "1001",
            status: Available,
            reserved: false,
            comment: None,
        },
        SeedProfile {
            id: "c5",
            name: "David Brown",
            skills: &["Java", "Spring Boot"],
            experience_years: 3,
            match_score: 75,
            availability: "Available in 2 weeks",
            job: "1001",
            status: Rejected(RejectionType::ByInterviewer),
            reserved: false,
            comment: Some((
                "John Doe",
                TransitionAction::Rejected,
                "Does not meet technical requirements",
            )),
        },
        SeedProfile {
            id: "c6",
            name: "Lisa Zhang",
            skills: &["Java", "Spring Boot", "Kubernetes"],
            experience_years: 8,
            match_score: 93,
            availability: "Available immediately",
            job: "1001",
            status: Rejected(RejectionType::ByCandidate),
            reserved: false,
            comment: Some((
                "Lisa Zhang",
                TransitionAction::Declined,
                "Found another opportunity with better compensation package",
            )),
        },
        SeedProfile {
            id: "c7",
            name: "Robert Taylor",
            skills: &["Java", "Spring Boot", "React"],
            experience_years: 6,
            match_score: 89,
            availability: "Available immediately",
            job: "1001",
            status: Selected,
            reserved: false,
            comment: None,
        },
        SeedProfile {
            id: "c8",
            name: "Alex Rodriguez",
            skills: &["React Native", "JavaScript"],
            experience_years: 4,
            match_score: 87,
            availability: "Available immediately",
            job: "1002",
            status: InterviewScheduled,
            reserved: true,
            comment: None,
        },
        SeedProfile {
            id: "c9",
            name: "Jenny Kim",
            skills: &["React Native", "Redux"],
            experience_years: 5,
            match_score: 85,
            availability: "1 week notice",
            job: "1002",
            status: Available,
            reserved: false,
            comment: None,
        },
    ]
}

/// Wire an in-memory service loaded with the demo data set: two open job
/// requests and the candidate pipeline attached to each.
pub(crate) fn seeded_service() -> Arc<StaffingService> {
    let jobs = InMemoryJobDirectory::default();
    jobs.insert(JobSummary {
        id: JobId::new("1001"),
        project_name: "E-commerce Platform".to_string(),
        role: "Senior Java Developer".to_string(),
        status: JobStatus::Open,
    });
    jobs.insert(JobSummary {
        id: JobId::new("1002"),
        project_name: "Mobile Banking App".to_string(),
        role: "React Native Developer".to_string(),
        status: JobStatus::InProgress,
    });

    let service = Arc::new(CandidateDispositionService::new(
        Arc::new(InMemoryCandidateRegistry::default()),
        Arc::new(jobs),
    ));

    for profile in seed_profiles() {
        let job = JobId::new(profile.job);
        let mut candidate = Candidate::new(CandidateId::new(profile.id), profile.name);
        candidate.skills = profile.skills.iter().map(|s| s.to_string()).collect();
        candidate.experience_years = profile.experience_years;
        candidate.match_score = profile.match_score;
        candidate.availability_note = profile.availability.to_string();
        candidate.resume_url = Some(format!(
            "https://profiles.example.com/{}/resume.pdf",
            profile.id
        ));
        candidate.per_job_status.insert(job.clone(), profile.status);
        if profile.reserved {
            candidate.reserved_for_job = Some(job.clone());
        }
        if let Some((actor, action, reason)) = profile.comment {
            candidate.comments.append(Comment::new(
                candidate.id.clone(),
                job.clone(),
                action,
                reason,
                Actor::new(actor),
            ));
        }
        candidate.recompute_global_status();

        service
            .ingest(candidate)
            .expect("seed data satisfies the reservation invariants");
    }

    service
}
