use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::double_option;

/// Pipeline stage. Moving a candidate forward is a stage progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    #[default]
    Sourced,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub stage: CandidateStage,
    /// Owning recruiter. Not checked against the recruiter list.
    pub recruiter_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub stage: CandidateStage,
    #[serde(default)]
    pub recruiter_id: Option<Uuid>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub stage: Option<CandidateStage>,
    /// `null` unassigns the candidate.
    #[serde(default, deserialize_with = "double_option")]
    pub recruiter_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_tells_null_from_absent() {
        let absent: CandidatePatch = serde_json::from_str(r#"{"stage": "interview"}"#).unwrap();
        assert_eq!(absent.recruiter_id, None);
        assert_eq!(absent.notes, None);
        assert_eq!(absent.stage, Some(CandidateStage::Interview));

        let cleared: CandidatePatch =
            serde_json::from_str(r#"{"recruiter_id": null, "notes": null}"#).unwrap();
        assert_eq!(cleared.recruiter_id, Some(None));
        assert_eq!(cleared.notes, Some(None));
    }

    #[test]
    fn test_patch_sets_value() {
        let id = Uuid::new_v4();
        let patch: CandidatePatch =
            serde_json::from_str(&format!(r#"{{"recruiter_id": "{id}", "notes": "call back"}}"#))
                .unwrap();
        assert_eq!(patch.recruiter_id, Some(Some(id)));
        assert_eq!(patch.notes, Some(Some("call back".to_string())));
    }
}
