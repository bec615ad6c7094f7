//! Axum route handlers for the companion mini-agents.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: String,
}

#[derive(Debug, Serialize)]
pub struct GardenResponse {
    pub status: String,
}

/// GET /insights
pub async fn handle_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    Json(InsightsResponse {
        insights: state.companions.insight().await,
    })
}

/// GET /mood-analysis
pub async fn handle_mood_analysis(State(state): State<AppState>) -> Json<AnalysisResponse> {
    Json(AnalysisResponse {
        analysis: state.companions.mood_analysis().await.to_string(),
    })
}

/// GET /wellness-tip
pub async fn handle_wellness_tip(State(state): State<AppState>) -> Json<TipResponse> {
    Json(TipResponse {
        tip: state.companions.next_wellness_tip().await.to_string(),
    })
}

/// GET /garden-status
pub async fn handle_garden_status(State(state): State<AppState>) -> Json<GardenResponse> {
    Json(GardenResponse {
        status: state.companions.garden_status().await.to_string(),
    })
}

/// GET /goal
pub async fn handle_get_goals(State(state): State<AppState>) -> Json<GoalsResponse> {
    Json(GoalsResponse {
        goals: state.companions.goals().await,
    })
}

/// POST /goal
pub async fn handle_set_goal(
    State(state): State<AppState>,
    Json(request): Json<GoalRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let goal = validate_goal(&request.goal)?;
    Ok(Json(MessageResponse {
        message: state.companions.set_goal(goal).await,
    }))
}

/// POST /goal/complete
pub async fn handle_complete_goal(
    State(state): State<AppState>,
    Json(request): Json<GoalRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let goal = validate_goal(&request.goal)?;
    Ok(Json(MessageResponse {
        message: state.companions.complete_goal(goal).await,
    }))
}

fn validate_goal(goal: &str) -> Result<&str, AppError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }
    Ok(goal)
}
