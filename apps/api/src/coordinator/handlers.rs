//! Axum route handler for free-text requests.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::coordinator::handle_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

/// POST /ask
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let response = handle_request(state.generator.as_ref(), &request.message).await;
    Json(AskResponse { response })
}
