//! Assist — AI-drafted recruiting text behind a pluggable generator.
//!
//! `AppState` holds an `Arc<dyn TextGenerator>`: `LlmTextGenerator` when an
//! API key is configured, `UnconfiguredGenerator` otherwise.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assist::prompts::{
    CANDIDATE_SUMMARY_TEMPLATE, INTERVIEW_QUESTIONS_TEMPLATE, JOB_DESCRIPTION_TEMPLATE,
    OUTREACH_EMAIL_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{FACTUALITY_INSTRUCTION, RECRUITING_ASSISTANT_SYSTEM};
use crate::llm_client::{LlmClient, MODEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    JobDescription,
    OutreachEmail,
    CandidateSummary,
    InterviewQuestions,
}

impl GenerationKind {
    fn template(self) -> &'static str {
        match self {
            GenerationKind::JobDescription => JOB_DESCRIPTION_TEMPLATE,
            GenerationKind::OutreachEmail => OUTREACH_EMAIL_TEMPLATE,
            GenerationKind::CandidateSummary => CANDIDATE_SUMMARY_TEMPLATE,
            GenerationKind::InterviewQuestions => INTERVIEW_QUESTIONS_TEMPLATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Concise,
}

impl Tone {
    fn instruction(self) -> &'static str {
        match self {
            Tone::Professional => "TONE: professional and polished; no slang.",
            Tone::Friendly => "TONE: warm and conversational, but still respectful.",
            Tone::Concise => "TONE: direct and brief; cut every word that is not needed.",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub kind: GenerationKind,
    /// Free-form details (role, candidate background, notes) the text is built from.
    pub context: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedText {
    pub kind: GenerationKind,
    pub text: String,
    pub model: String,
}

/// Renders the user prompt for a request.
pub fn build_prompt(request: &GenerateRequest) -> String {
    request
        .kind
        .template()
        .replace("{tone_instruction}", request.tone.instruction())
        .replace("{factuality_instruction}", FACTUALITY_INSTRUCTION)
        .replace("{context}", request.context.trim())
}

/// Implement this to swap generation backends without touching handlers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedText, AppError>;
}

pub struct LlmTextGenerator(pub LlmClient);

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedText, AppError> {
        let prompt = build_prompt(request);
        let text = self
            .0
            .complete_text(&prompt, RECRUITING_ASSISTANT_SYSTEM)
            .await?;
        Ok(GeneratedText {
            kind: request.kind,
            text,
            model: MODEL.to_string(),
        })
    }
}

/// Used when no API key is configured.
pub struct UnconfiguredGenerator;

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _request: &GenerateRequest) -> Result<GeneratedText, AppError> {
        Err(AppError::MissingCredentials(
            "Set ANTHROPIC_API_KEY to enable AI generation".to_string(),
        ))
    }
}
