//! Agency Store — the in-memory application state behind the dashboard.
//!
//! Holds recruiters, candidates and jobs in insertion order. All mutation goes
//! through the command-style methods below, which validate input and return the
//! new or updated record. There is no referential integrity between entities:
//! removing a recruiter leaves candidates that point at it untouched.

pub mod fixtures;
pub mod handlers;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidatePatch, CandidateStage, NewCandidate};
use crate::models::job::{Job, JobPatch, NewJob};
use crate::models::recruiter::{default_avatar, NewRecruiter, Recruiter, RecruiterPatch};

#[derive(Debug, Default)]
pub struct AgencyStore {
    recruiters: Vec<Recruiter>,
    candidates: Vec<Candidate>,
    jobs: Vec<Job>,
}

impl AgencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Recruiters
    // ────────────────────────────────────────────────────────────────────────

    pub fn recruiters(&self) -> &[Recruiter] {
        &self.recruiters
    }

    pub fn recruiter(&self, id: Uuid) -> Result<&Recruiter, AppError> {
        self.recruiters
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| recruiter_not_found(id))
    }

    pub fn add_recruiter(&mut self, new: NewRecruiter) -> Result<Recruiter, AppError> {
        let name = require_text("name", &new.name)?;
        let recruiter = Recruiter {
            id: Uuid::new_v4(),
            avatar: non_blank(new.avatar).unwrap_or_else(|| default_avatar(&name)),
            name,
            job_title: non_blank(new.job_title),
            counts: new.counts,
            created_at: Utc::now(),
        };
        info!("Added recruiter {} ({})", recruiter.name, recruiter.id);
        self.recruiters.push(recruiter.clone());
        Ok(recruiter)
    }

    pub fn update_recruiter(
        &mut self,
        id: Uuid,
        patch: RecruiterPatch,
    ) -> Result<Recruiter, AppError> {
        let name = patch
            .name
            .as_deref()
            .map(|n| require_text("name", n))
            .transpose()?;
        let recruiter = self
            .recruiters
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| recruiter_not_found(id))?;

        if let Some(name) = name {
            recruiter.name = name;
        }
        if let Some(avatar) = non_blank(patch.avatar) {
            recruiter.avatar = avatar;
        }
        if let Some(job_title) = patch.job_title {
            recruiter.job_title = non_blank(job_title);
        }
        if let Some(counts) = patch.counts {
            recruiter.counts = counts;
        }
        info!("Updated recruiter {id}");
        Ok(recruiter.clone())
    }

    pub fn remove_recruiter(&mut self, id: Uuid) -> Result<Recruiter, AppError> {
        let idx = self
            .recruiters
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| recruiter_not_found(id))?;
        info!("Removed recruiter {id}");
        Ok(self.recruiters.remove(idx))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Candidates
    // ────────────────────────────────────────────────────────────────────────

    /// Lists candidates, optionally restricted to one pipeline stage.
    pub fn candidates(&self, stage: Option<CandidateStage>) -> Vec<Candidate> {
        self.candidates
            .iter()
            .filter(|c| stage.map_or(true, |s| c.stage == s))
            .cloned()
            .collect()
    }

    pub fn candidate(&self, id: Uuid) -> Result<&Candidate, AppError> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))
    }

    pub fn add_candidate(&mut self, new: NewCandidate) -> Result<Candidate, AppError> {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            name: require_text("name", &new.name)?,
            email: require_email(&new.email)?,
            role: new.role.trim().to_string(),
            stage: new.stage,
            recruiter_id: new.recruiter_id,
            notes: non_blank(new.notes),
            created_at: Utc::now(),
        };
        info!("Added candidate {} ({})", candidate.name, candidate.id);
        self.candidates.push(candidate.clone());
        Ok(candidate)
    }

    pub fn update_candidate(
        &mut self,
        id: Uuid,
        patch: CandidatePatch,
    ) -> Result<Candidate, AppError> {
        let name = patch
            .name
            .as_deref()
            .map(|n| require_text("name", n))
            .transpose()?;
        let email = patch.email.as_deref().map(require_email).transpose()?;
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))?;

        if let Some(name) = name {
            candidate.name = name;
        }
        if let Some(email) = email {
            candidate.email = email;
        }
        if let Some(role) = patch.role {
            candidate.role = role.trim().to_string();
        }
        if let Some(stage) = patch.stage {
            if stage != candidate.stage {
                info!("Candidate {id} moved {:?} → {:?}", candidate.stage, stage);
            }
            candidate.stage = stage;
        }
        if let Some(recruiter_id) = patch.recruiter_id {
            candidate.recruiter_id = recruiter_id;
        }
        if let Some(notes) = patch.notes {
            candidate.notes = non_blank(notes);
        }
        Ok(candidate.clone())
    }

    pub fn remove_candidate(&mut self, id: Uuid) -> Result<Candidate, AppError> {
        let idx = self
            .candidates
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))?;
        info!("Removed candidate {id}");
        Ok(self.candidates.remove(idx))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Jobs
    // ────────────────────────────────────────────────────────────────────────

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: Uuid) -> Result<&Job, AppError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| job_not_found(id))
    }

    pub fn add_job(&mut self, new: NewJob) -> Result<Job, AppError> {
        let job = Job {
            id: Uuid::new_v4(),
            title: require_text("title", &new.title)?,
            company: require_text("company", &new.company)?,
            location: new.location.trim().to_string(),
            status: new.status,
            openings: require_openings(new.openings)?,
            created_at: Utc::now(),
        };
        info!("Added job {} at {} ({})", job.title, job.company, job.id);
        self.jobs.push(job.clone());
        Ok(job)
    }

    pub fn update_job(&mut self, id: Uuid, patch: JobPatch) -> Result<Job, AppError> {
        let title = patch
            .title
            .as_deref()
            .map(|t| require_text("title", t))
            .transpose()?;
        let company = patch
            .company
            .as_deref()
            .map(|c| require_text("company", c))
            .transpose()?;
        let openings = patch.openings.map(require_openings).transpose()?;
        let job = self
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| job_not_found(id))?;

        if let Some(title) = title {
            job.title = title;
        }
        if let Some(company) = company {
            job.company = company;
        }
        if let Some(location) = patch.location {
            job.location = location.trim().to_string();
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        if let Some(openings) = openings {
            job.openings = openings;
        }
        info!("Updated job {id}");
        Ok(job.clone())
    }

    pub fn remove_job(&mut self, id: Uuid) -> Result<Job, AppError> {
        let idx = self
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| job_not_found(id))?;
        info!("Removed job {id}");
        Ok(self.jobs.remove(idx))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn require_email(value: &str) -> Result<String, AppError> {
    let email = require_text("email", value)?;
    if !email.contains('@') {
        return Err(AppError::Validation(format!(
            "email '{email}' is not a valid address"
        )));
    }
    Ok(email)
}

fn require_openings(openings: u32) -> Result<u32, AppError> {
    if openings == 0 {
        return Err(AppError::Validation(
            "openings must be at least 1".to_string(),
        ));
    }
    Ok(openings)
}

/// Trims an optional string, mapping blank values to `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn recruiter_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Recruiter {id} not found"))
}

fn candidate_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Candidate {id} not found"))
}

fn job_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Job {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;
    use crate::models::recruiter::ActivityCounts;

    fn new_recruiter(name: &str) -> NewRecruiter {
        NewRecruiter {
            name: name.to_string(),
            avatar: None,
            job_title: None,
            counts: ActivityCounts {
                placements: 2,
                stage_progressions: 10,
                applications: 30,
            },
        }
    }

    fn new_candidate(name: &str, recruiter_id: Option<Uuid>) -> NewCandidate {
        NewCandidate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Backend Engineer".to_string(),
            stage: CandidateStage::Screening,
            recruiter_id,
            notes: None,
        }
    }

    #[test]
    fn test_add_recruiter_fills_defaults() {
        let mut store = AgencyStore::new();
        let r = store.add_recruiter(new_recruiter("  Dana Whitfield ")).unwrap();
        assert_eq!(r.name, "Dana Whitfield");
        assert!(r.avatar.contains("name=DW"));
        assert!(r.job_title.is_none());
        assert_eq!(store.recruiters().len(), 1);
    }

    #[test]
    fn test_add_recruiter_rejects_blank_name() {
        let mut store = AgencyStore::new();
        let err = store.add_recruiter(new_recruiter("   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.recruiters().is_empty());
    }

    #[test]
    fn test_recruiters_keep_insertion_order() {
        let mut store = AgencyStore::new();
        for name in ["Avery", "Blake", "Casey"] {
            store.add_recruiter(new_recruiter(name)).unwrap();
        }
        let names: Vec<&str> = store.recruiters().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Avery", "Blake", "Casey"]);
    }

    #[test]
    fn test_update_recruiter_patches_only_given_fields() {
        let mut store = AgencyStore::new();
        let r = store.add_recruiter(new_recruiter("Avery")).unwrap();
        let updated = store
            .update_recruiter(
                r.id,
                RecruiterPatch {
                    job_title: Some(Some("Senior Recruiter".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Avery");
        assert_eq!(updated.job_title.as_deref(), Some("Senior Recruiter"));
        assert_eq!(updated.counts, r.counts);
    }

    #[test]
    fn test_update_recruiter_null_job_title_clears_it() {
        let mut store = AgencyStore::new();
        let mut req = new_recruiter("Avery");
        req.job_title = Some("Sourcer".to_string());
        let r = store.add_recruiter(req).unwrap();

        let untouched = store
            .update_recruiter(r.id, RecruiterPatch::default())
            .unwrap();
        assert_eq!(untouched.job_title.as_deref(), Some("Sourcer"));

        let cleared = store
            .update_recruiter(
                r.id,
                RecruiterPatch {
                    job_title: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(cleared.job_title.is_none());
    }

    #[test]
    fn test_update_recruiter_blank_name_leaves_record_untouched() {
        let mut store = AgencyStore::new();
        let r = store.add_recruiter(new_recruiter("Avery")).unwrap();
        let err = store
            .update_recruiter(
                r.id,
                RecruiterPatch {
                    name: Some(" ".to_string()),
                    counts: Some(ActivityCounts::default()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.recruiter(r.id).unwrap().counts, r.counts);
    }

    #[test]
    fn test_update_unknown_recruiter_not_found() {
        let mut store = AgencyStore::new();
        let err = store
            .update_recruiter(Uuid::new_v4(), RecruiterPatch::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_remove_recruiter_does_not_cascade() {
        let mut store = AgencyStore::new();
        let r = store.add_recruiter(new_recruiter("Avery")).unwrap();
        let c = store.add_candidate(new_candidate("Jordan", Some(r.id))).unwrap();

        let removed = store.remove_recruiter(r.id).unwrap();
        assert_eq!(removed.id, r.id);
        assert!(store.recruiters().is_empty());

        let orphan = store.candidate(c.id).unwrap();
        assert_eq!(orphan.recruiter_id, Some(r.id));
        assert!(matches!(
            store.remove_recruiter(r.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_candidate_email_validated() {
        let mut store = AgencyStore::new();
        let mut bad = new_candidate("Jordan", None);
        bad.email = "not-an-email".to_string();
        assert!(matches!(
            store.add_candidate(bad),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_candidates_filter_by_stage() {
        let mut store = AgencyStore::new();
        let a = store.add_candidate(new_candidate("Jordan", None)).unwrap();
        store.add_candidate(new_candidate("Riley", None)).unwrap();
        store
            .update_candidate(
                a.id,
                CandidatePatch {
                    stage: Some(CandidateStage::Offer),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.candidates(None).len(), 2);
        let offers = store.candidates(Some(CandidateStage::Offer));
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].name, "Jordan");
    }

    #[test]
    fn test_update_candidate_clears_assignment_and_notes() {
        let mut store = AgencyStore::new();
        let r = store.add_recruiter(new_recruiter("Avery")).unwrap();
        let mut req = new_candidate("Jordan", Some(r.id));
        req.notes = Some("Prefers remote".to_string());
        let c = store.add_candidate(req).unwrap();

        let kept = store
            .update_candidate(
                c.id,
                CandidatePatch {
                    stage: Some(CandidateStage::Interview),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(kept.recruiter_id, Some(r.id));
        assert_eq!(kept.notes.as_deref(), Some("Prefers remote"));

        let cleared = store
            .update_candidate(
                c.id,
                CandidatePatch {
                    recruiter_id: Some(None),
                    notes: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(cleared.recruiter_id.is_none());
        assert!(cleared.notes.is_none());
        assert_eq!(cleared.stage, CandidateStage::Interview);
    }

    #[test]
    fn test_job_openings_must_be_positive() {
        let mut store = AgencyStore::new();
        let new = NewJob {
            title: "Staff Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            status: JobStatus::Open,
            openings: 0,
        };
        assert!(matches!(store.add_job(new), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_update_job_zero_openings_rejected() {
        let mut store = AgencyStore::new();
        let job = store
            .add_job(NewJob {
                title: "Staff Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                status: JobStatus::Open,
                openings: 3,
            })
            .unwrap();
        let err = store
            .update_job(
                job.id,
                JobPatch {
                    openings: Some(0),
                    status: Some(JobStatus::Closed),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let unchanged = store.job(job.id).unwrap();
        assert_eq!(unchanged.openings, 3);
        assert_eq!(unchanged.status, JobStatus::Open);
    }

    #[test]
    fn test_job_lifecycle() {
        let mut store = AgencyStore::new();
        let job = store
            .add_job(NewJob {
                title: "Data Analyst".to_string(),
                company: "Globex".to_string(),
                location: "Austin, TX".to_string(),
                status: JobStatus::Open,
                openings: 2,
            })
            .unwrap();
        let filled = store
            .update_job(
                job.id,
                JobPatch {
                    status: Some(JobStatus::Filled),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(filled.status, JobStatus::Filled);
        assert_eq!(filled.openings, 2);

        store.remove_job(job.id).unwrap();
        assert!(store.jobs().is_empty());
        assert!(matches!(store.job(job.id), Err(AppError::NotFound(_))));
    }
}
