use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Inclusive bounds accepted for `mood_score` at the HTTP boundary.
pub const MOOD_SCORE_MIN: i32 = 1;
pub const MOOD_SCORE_MAX: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_value: String,
    pub mood_score: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The two columns the weekly trend needs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodSample {
    pub mood_score: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMood {
    pub mood_value: String,
    pub mood_score: i32,
    #[serde(default)]
    pub notes: Option<String>,
}
