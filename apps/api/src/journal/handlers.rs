//! Axum route handlers for journal entries and journal agents.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::journal::prompt_agent::{generate_journal_prompts, pick_prompt};
use crate::journal::reflector::reflect_on_entry;
use crate::models::journal::{JournalEntryRow, NewJournalEntry};
use crate::routes::{resolve_limit, LimitQuery};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReflectRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ReflectResponse {
    pub reflection: String,
}

#[derive(Debug, Serialize)]
pub struct JournalPromptsResponse {
    pub prompts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalPromptResponse {
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /journal
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(request): Json<NewJournalEntry>,
) -> Result<Json<JournalEntryRow>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let entry = state
        .store
        .create_journal_entry(state.config.user_id, &request)
        .await?;
    Ok(Json(entry))
}

/// GET /journal?limit=N
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<JournalEntryRow>>, AppError> {
    let entries = state
        .store
        .get_user_journal_entries(state.config.user_id, resolve_limit(params.limit))
        .await?;
    Ok(Json(entries))
}

/// POST /journal/reflect
pub async fn handle_reflect(
    State(state): State<AppState>,
    Json(request): Json<ReflectRequest>,
) -> Result<Json<ReflectResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let reflection = reflect_on_entry(state.generator.as_ref(), &request.content).await;
    Ok(Json(ReflectResponse { reflection }))
}

/// GET /journal-prompt
pub async fn handle_journal_prompts(State(state): State<AppState>) -> Json<JournalPromptsResponse> {
    let prompts = generate_journal_prompts(state.generator.as_ref()).await;
    Json(JournalPromptsResponse { prompts })
}

/// GET /journal-prompt/random
pub async fn handle_random_journal_prompt(
    State(state): State<AppState>,
) -> Json<JournalPromptResponse> {
    let prompts = generate_journal_prompts(state.generator.as_ref()).await;
    let prompt = pick_prompt(&prompts, &mut rand::thread_rng());
    Json(JournalPromptResponse { prompt })
}
