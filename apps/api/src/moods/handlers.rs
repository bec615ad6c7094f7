//! Axum route handlers for mood check-ins and trends.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::mood::{MoodRow, NewMood, MOOD_SCORE_MAX, MOOD_SCORE_MIN};
use crate::moods::trend::{
    parse_utc_timestamp, weekly_trend, window_start, MoodTrendResponse, TREND_WINDOW_DAYS,
};
use crate::routes::{resolve_limit, LimitQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// RFC 3339 end of the window; defaults to now. An unencoded `+hh:mm`
    /// offset is accepted.
    pub as_of: Option<String>,
}

/// POST /mood-checkin
///
/// Persists the check-in, then feeds the label to the in-memory companions.
pub async fn handle_mood_checkin(
    State(state): State<AppState>,
    Json(request): Json<NewMood>,
) -> Result<Json<MoodRow>, AppError> {
    validate_mood(&request)?;

    let mood = state.store.create_mood(state.config.user_id, &request).await?;
    let message = state.companions.record_mood(&mood.mood_value).await;
    info!("{message}");

    Ok(Json(mood))
}

/// GET /moods?limit=N
pub async fn handle_list_moods(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<MoodRow>>, AppError> {
    let moods = state
        .store
        .get_user_moods(state.config.user_id, resolve_limit(params.limit))
        .await?;
    Ok(Json(moods))
}

/// GET /moods/weekly-trend
pub async fn handle_weekly_trend(
    State(state): State<AppState>,
    Query(params): Query<TrendQuery>,
) -> Result<Json<MoodTrendResponse>, AppError> {
    let now = match params.as_of.as_deref() {
        Some(raw) => parse_utc_timestamp(raw).ok_or_else(|| {
            AppError::Validation(format!("as_of is not an RFC 3339 timestamp: '{raw}'"))
        })?,
        None => Utc::now(),
    };

    let samples = state
        .store
        .get_moods_since(state.config.user_id, window_start(now, TREND_WINDOW_DAYS))
        .await?;

    Ok(Json(MoodTrendResponse {
        trend: weekly_trend(&samples, now, TREND_WINDOW_DAYS),
    }))
}

fn validate_mood(mood: &NewMood) -> Result<(), AppError> {
    if mood.mood_value.trim().is_empty() {
        return Err(AppError::Validation("mood_value cannot be empty".to_string()));
    }
    if !(MOOD_SCORE_MIN..=MOOD_SCORE_MAX).contains(&mood.mood_score) {
        return Err(AppError::Validation(format!(
            "mood_score must be between {MOOD_SCORE_MIN} and {MOOD_SCORE_MAX}"
        )));
    }
    Ok(())
}
