//! Axum route handlers for the Support agents.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::insight::{InsightRow, NewInsight};
use crate::routes::resolve_limit;
use crate::state::AppState;
use crate::support::affirmation::{generate_affirmation, AffirmationContext};
use crate::support::cognitive::{analyze, render_journals, CognitiveSupportResult};

pub const COGNITIVE_SUPPORT_INSIGHT: &str = "cognitive_support";

/// Journal entries woven into an affirmation.
const AFFIRMATION_JOURNAL_LIMIT: i64 = 3;

#[derive(Debug, Deserialize)]
pub struct InsightHistoryQuery {
    pub limit: Option<i64>,
    pub insight_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AffirmationResponse {
    pub quote: String,
}

/// GET /affirmation-quote
///
/// Personalised with the latest mood and a few recent entries.
pub async fn handle_affirmation(
    State(state): State<AppState>,
) -> Result<Json<AffirmationResponse>, AppError> {
    let user_id = state.config.user_id;
    let latest_mood = state.store.get_user_moods(user_id, 1).await?;
    let journals = state
        .store
        .get_user_journal_entries(user_id, AFFIRMATION_JOURNAL_LIMIT)
        .await?;

    let context = AffirmationContext {
        user_info: state.config.user_profile.clone(),
        user_mood: latest_mood
            .first()
            .map(|m| format!("{} ({})", m.mood_value, m.mood_score))
            .unwrap_or_default(),
        latest_journals: render_journals(&journals),
    };

    let quote = generate_affirmation(state.generator.as_ref(), &context).await;
    Ok(Json(AffirmationResponse { quote }))
}

/// POST /cognitiveSupport
///
/// Analyzes the last week of moods and journals. Non-empty results are also
/// stored as a `cognitive_support` insight.
pub async fn handle_cognitive_support(
    State(state): State<AppState>,
) -> Result<Json<CognitiveSupportResult>, AppError> {
    let user_id = state.config.user_id;
    let result = analyze(state.store.as_ref(), state.generator.as_ref(), user_id).await?;

    if !result.is_empty() {
        let insight = NewInsight {
            insight_type: COGNITIVE_SUPPORT_INSIGHT.to_string(),
            content: result.summary.clone(),
            data: serde_json::to_value(&result).ok(),
        };
        state.store.create_insight(user_id, &insight).await?;
    }

    Ok(Json(result))
}

/// GET /insights/history?limit=N&insight_type=T
pub async fn handle_insight_history(
    State(state): State<AppState>,
    Query(params): Query<InsightHistoryQuery>,
) -> Result<Json<Vec<InsightRow>>, AppError> {
    let insights = state
        .store
        .get_user_insights(
            state.config.user_id,
            params.insight_type.as_deref(),
            resolve_limit(params.limit),
        )
        .await?;
    Ok(Json(insights))
}
