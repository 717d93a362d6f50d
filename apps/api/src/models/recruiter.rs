use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::time_range::TimeRange;
use crate::models::double_option;

/// Raw activity counts for one recruiter over the one-month baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounts {
    pub placements: u32,
    pub stage_progressions: u32,
    pub applications: u32,
}

impl ActivityCounts {
    /// Scales each component by the range multiplier, rounding to the nearest integer.
    pub fn scaled(&self, range: TimeRange) -> Self {
        let m = range.multiplier();
        let scale = |n: u32| (f64::from(n) * m).round().min(f64::from(u32::MAX)) as u32;
        Self {
            placements: scale(self.placements),
            stage_progressions: scale(self.stage_progressions),
            applications: scale(self.applications),
        }
    }

    pub fn saturating_add(&self, other: &Self) -> Self {
        Self {
            placements: self.placements.saturating_add(other.placements),
            stage_progressions: self
                .stage_progressions
                .saturating_add(other.stage_progressions),
            applications: self.applications.saturating_add(other.applications),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recruiter {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub job_title: Option<String>,
    pub counts: ActivityCounts,
    pub created_at: DateTime<Utc>,
}

/// Request body for adding a recruiter.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecruiter {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub counts: ActivityCounts,
}

/// Partial update. Absent fields are left untouched; `"job_title": null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecruiterPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub job_title: Option<Option<String>>,
    pub counts: Option<ActivityCounts>,
}

/// Placeholder avatar derived from the recruiter's initials.
pub fn default_avatar(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    format!("https://ui-avatars.com/api/?name={initials}&background=random")
}
