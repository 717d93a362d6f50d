pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::metrics::handlers as metrics;
use crate::state::AppState;
use crate::store::handlers as store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Metrics
        .route("/api/v1/dashboard", get(metrics::handle_dashboard))
        .route("/api/v1/leaderboard", get(metrics::handle_leaderboard))
        .route("/api/v1/time-ranges", get(metrics::handle_time_ranges))
        .route(
            "/api/v1/recruiters/:id/score",
            get(metrics::handle_recruiter_score),
        )
        // Recruiters
        .route(
            "/api/v1/recruiters",
            get(store::handle_list_recruiters).post(store::handle_add_recruiter),
        )
        .route(
            "/api/v1/recruiters/:id",
            get(store::handle_get_recruiter)
                .patch(store::handle_update_recruiter)
                .delete(store::handle_remove_recruiter),
        )
        // Candidates
        .route(
            "/api/v1/candidates",
            get(store::handle_list_candidates).post(store::handle_add_candidate),
        )
        .route(
            "/api/v1/candidates/:id",
            get(store::handle_get_candidate)
                .patch(store::handle_update_candidate)
                .delete(store::handle_remove_candidate),
        )
        // Jobs
        .route(
            "/api/v1/jobs",
            get(store::handle_list_jobs).post(store::handle_add_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(store::handle_get_job)
                .patch(store::handle_update_job)
                .delete(store::handle_remove_job),
        )
        // Assist
        .route("/api/v1/assist/generate", post(assist::handle_generate))
        .with_state(state)
}
