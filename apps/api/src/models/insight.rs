use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub insight_type: String,
    pub content: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInsight {
    pub insight_type: String,
    pub content: String,
    pub data: Option<Value>,
}
