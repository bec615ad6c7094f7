pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::companions::handlers as companions;
use crate::coordinator::handlers as coordinator;
use crate::journal::handlers as journal;
use crate::moods::handlers as moods;
use crate::state::AppState;
use crate::support::handlers as support;

pub const DEFAULT_LIST_LIMIT: i64 = 7;
pub const MAX_LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// Missing limits default to a week's worth; others are clamped to `1..=MAX_LIST_LIMIT`.
pub fn resolve_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Moods
        .route("/mood-checkin", post(moods::handle_mood_checkin))
        .route("/moods", get(moods::handle_list_moods))
        .route("/moods/weekly-trend", get(moods::handle_weekly_trend))
        // Journal
        .route(
            "/journal",
            get(journal::handle_list_entries).post(journal::handle_create_entry),
        )
        .route("/journal/reflect", post(journal::handle_reflect))
        .route("/journal-prompt", get(journal::handle_journal_prompts))
        .route(
            "/journal-prompt/random",
            get(journal::handle_random_journal_prompt),
        )
        // Support agents
        .route("/affirmation-quote", get(support::handle_affirmation))
        .route("/cognitiveSupport", post(support::handle_cognitive_support))
        .route("/insights/history", get(support::handle_insight_history))
        // Companions
        .route("/insights", get(companions::handle_insights))
        .route("/mood-analysis", get(companions::handle_mood_analysis))
        .route("/wellness-tip", get(companions::handle_wellness_tip))
        .route(
            "/goal",
            get(companions::handle_get_goals).post(companions::handle_set_goal),
        )
        .route("/goal/complete", post(companions::handle_complete_goal))
        .route("/garden-status", get(companions::handle_garden_status))
        // Free-text coordinator
        .route("/ask", post(coordinator::handle_ask))
        .with_state(state)
}
