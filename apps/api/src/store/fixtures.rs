//! Seed data for the Agency Store.
//!
//! Built-in fixtures mirror a small agency. A JSON file with the same shape can
//! replace them via `FIXTURES_PATH`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::candidate::{CandidateStage, NewCandidate};
use crate::models::job::{JobStatus, NewJob};
use crate::models::recruiter::{ActivityCounts, NewRecruiter};
use crate::store::AgencyStore;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub recruiters: Vec<NewRecruiter>,
    #[serde(default)]
    pub candidates: Vec<FixtureCandidate>,
    #[serde(default)]
    pub jobs: Vec<NewJob>,
}

/// A candidate whose owner is referenced by recruiter name, since ids are
/// only assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCandidate {
    #[serde(flatten)]
    pub candidate: NewCandidate,
    #[serde(default)]
    pub recruiter: Option<String>,
}

impl FixtureSet {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Fixtures file {} is not valid JSON", path.display()))
    }

    /// Inserts every fixture into `store`, resolving candidate owners by name.
    pub fn load_into(self, store: &mut AgencyStore) -> Result<()> {
        for recruiter in self.recruiters {
            store.add_recruiter(recruiter)?;
        }
        for FixtureCandidate {
            mut candidate,
            recruiter,
        } in self.candidates
        {
            if let Some(name) = recruiter {
                match store.recruiters().iter().find(|r| r.name == name) {
                    Some(r) => candidate.recruiter_id = Some(r.id),
                    None => warn!(
                        "Fixture candidate {} references unknown recruiter {name}",
                        candidate.name
                    ),
                }
            }
            store.add_candidate(candidate)?;
        }
        for job in self.jobs {
            store.add_job(job)?;
        }
        info!(
            "Loaded fixtures: {} recruiters, {} candidates, {} jobs",
            store.recruiters().len(),
            store.candidates(None).len(),
            store.jobs().len()
        );
        Ok(())
    }
}

fn recruiter(
    name: &str,
    title: &str,
    placements: u32,
    stage_progressions: u32,
    applications: u32,
) -> NewRecruiter {
    NewRecruiter {
        name: name.to_string(),
        avatar: None,
        job_title: Some(title.to_string()),
        counts: ActivityCounts {
            placements,
            stage_progressions,
            applications,
        },
    }
}

fn candidate(name: &str, role: &str, stage: CandidateStage, owner: &str) -> FixtureCandidate {
    FixtureCandidate {
        candidate: NewCandidate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: role.to_string(),
            stage,
            recruiter_id: None,
            notes: None,
        },
        recruiter: Some(owner.to_string()),
    }
}

fn job(title: &str, company: &str, location: &str, status: JobStatus, openings: u32) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        status,
        openings,
    }
}

/// The built-in demo agency.
pub fn builtin() -> FixtureSet {
    FixtureSet {
        recruiters: vec![
            recruiter("Sarah Mitchell", "Senior Technical Recruiter", 12, 88, 145),
            recruiter("James Okafor", "Technical Recruiter", 8, 64, 120),
            recruiter("Priya Raman", "Executive Search Lead", 5, 41, 60),
            recruiter("Tom Becker", "Recruiting Coordinator", 3, 35, 98),
            recruiter("Lena Park", "Associate Recruiter", 1, 12, 40),
        ],
        candidates: vec![
            candidate(
                "Marcus Hill",
                "Senior Backend Engineer",
                CandidateStage::Interview,
                "Sarah Mitchell",
            ),
            candidate("Aisha Khan", "Product Designer", CandidateStage::Screening, "James Okafor"),
            candidate("Diego Alvarez", "Engineering Manager", CandidateStage::Offer, "Priya Raman"),
            candidate("Hannah Lee", "Data Scientist", CandidateStage::Sourced, "Tom Becker"),
            candidate("Oliver Grant", "DevOps Engineer", CandidateStage::Hired, "Sarah Mitchell"),
            candidate("Chloe Dubois", "Frontend Engineer", CandidateStage::Rejected, "Lena Park"),
        ],
        jobs: vec![
            job("Senior Backend Engineer", "Northwind Labs", "Remote", JobStatus::Open, 2),
            job("Product Designer", "Bluefin Health", "New York, NY", JobStatus::Open, 1),
            job("Engineering Manager", "Orbital Freight", "Austin, TX", JobStatus::OnHold, 1),
            job("DevOps Engineer", "Northwind Labs", "Remote", JobStatus::Filled, 1),
        ],
    }
}
