use axum::{extract::State, Json};
use tracing::info;

use crate::assist::{GenerateRequest, GeneratedText};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/assist/generate
///
/// Drafts recruiting text (job description, outreach email, candidate summary,
/// interview questions) from free-form context.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GeneratedText>, AppError> {
    if request.context.trim().is_empty() {
        return Err(AppError::Validation("context cannot be empty".to_string()));
    }

    info!("Generating {:?} ({:?} tone)", request.kind, request.tone);
    let generated = state.text_generator.generate(&request).await?;
    Ok(Json(generated))
}
