//! Axum route handlers for recruiter, candidate and job records.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::candidate::{Candidate, CandidatePatch, CandidateStage, NewCandidate};
use crate::models::job::{Job, JobPatch, NewJob};
use crate::models::recruiter::{NewRecruiter, Recruiter, RecruiterPatch};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Recruiters
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/recruiters
pub async fn handle_list_recruiters(State(state): State<AppState>) -> Json<Vec<Recruiter>> {
    Json(state.store.read().await.recruiters().to_vec())
}

/// POST /api/v1/recruiters
pub async fn handle_add_recruiter(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewRecruiter>,
) -> Result<(StatusCode, Json<Recruiter>), AppError> {
    let recruiter = state.store.write().await.add_recruiter(req)?;
    Ok((StatusCode::CREATED, Json(recruiter)))
}

/// GET /api/v1/recruiters/:id
pub async fn handle_get_recruiter(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Recruiter>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.recruiter(id)?.clone()))
}

/// PATCH /api/v1/recruiters/:id
pub async fn handle_update_recruiter(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(patch): AppJson<RecruiterPatch>,
) -> Result<Json<Recruiter>, AppError> {
    let recruiter = state.store.write().await.update_recruiter(id, patch)?;
    Ok(Json(recruiter))
}

/// DELETE /api/v1/recruiters/:id
pub async fn handle_remove_recruiter(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.write().await.remove_recruiter(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Candidates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    pub stage: Option<CandidateStage>,
}

/// GET /api/v1/candidates?stage=
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CandidateQuery>,
) -> Json<Vec<Candidate>> {
    Json(state.store.read().await.candidates(query.stage))
}

/// POST /api/v1/candidates
pub async fn handle_add_candidate(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewCandidate>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let candidate = state.store.write().await.add_candidate(req)?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.candidate(id)?.clone()))
}

/// PATCH /api/v1/candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(patch): AppJson<CandidatePatch>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state.store.write().await.update_candidate(id, patch)?;
    Ok(Json(candidate))
}

/// DELETE /api/v1/candidates/:id
pub async fn handle_remove_candidate(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.write().await.remove_candidate(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.store.read().await.jobs().to_vec())
}

/// POST /api/v1/jobs
pub async fn handle_add_job(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = state.store.write().await.add_job(req)?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Job>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.job(id)?.clone()))
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(patch): AppJson<JobPatch>,
) -> Result<Json<Job>, AppError> {
    let job = state.store.write().await.update_job(id, patch)?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_remove_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.write().await.remove_job(id)?;
    Ok(StatusCode::NO_CONTENT)
}
