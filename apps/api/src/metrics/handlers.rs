//! Axum route handlers for the dashboard, leaderboard and per-recruiter scores.

use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::metrics::aggregate::{build_dashboard, DashboardSummary};
use crate::metrics::leaderboard::{build_leaderboard, score_recruiter, LeaderboardEntry};
use crate::metrics::score::target_points;
use crate::metrics::time_range::TimeRange;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
    pub limit: Option<usize>,
}

impl RangeQuery {
    /// Parses `?range=`, falling back to the configured default.
    fn resolve(&self, default: TimeRange) -> Result<TimeRange, AppError> {
        match self.range.as_deref() {
            None => Ok(default),
            Some(tag) => tag
                .parse::<TimeRange>()
                .map_err(|e| AppError::Validation(e.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecruiterScoreResponse {
    pub range: TimeRange,
    pub target_points: f64,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Serialize)]
pub struct TimeRangeInfo {
    pub tag: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
    pub target_points: f64,
}

/// GET /api/v1/dashboard?range=
pub async fn handle_dashboard(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RangeQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let range = query.resolve(state.default_range())?;
    let store = state.store.read().await;
    Ok(Json(build_dashboard(store.recruiters(), range)))
}

/// GET /api/v1/leaderboard?range=&limit=
pub async fn handle_leaderboard(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RangeQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let range = query.resolve(state.default_range())?;
    let store = state.store.read().await;
    Ok(Json(build_leaderboard(store.recruiters(), range, query.limit)))
}

/// GET /api/v1/recruiters/:id/score?range=
///
/// `rank` in the response is the recruiter's position on the full leaderboard.
pub async fn handle_recruiter_score(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<RangeQuery>,
) -> Result<Json<RecruiterScoreResponse>, AppError> {
    let range = query.resolve(state.default_range())?;
    let store = state.store.read().await;
    let recruiter = store.recruiter(id)?;

    let mut entry = score_recruiter(recruiter, range);
    entry.rank = build_leaderboard(store.recruiters(), range, None)
        .iter()
        .find(|e| e.recruiter_id == id)
        .map(|e| e.rank)
        .unwrap_or_default();

    Ok(Json(RecruiterScoreResponse {
        range,
        target_points: target_points(range),
        entry,
    }))
}

/// GET /api/v1/time-ranges
pub async fn handle_time_ranges() -> Json<Vec<TimeRangeInfo>> {
    Json(
        TimeRange::ALL_RANGES
            .into_iter()
            .map(|r| TimeRangeInfo {
                tag: r.tag(),
                label: r.label(),
                multiplier: r.multiplier(),
                target_points: target_points(r),
            })
            .collect(),
    )
}
