use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::insight::{InsightRow, NewInsight};
use crate::models::journal::{JournalEntryRow, NewJournalEntry};
use crate::models::mood::{MoodRow, MoodSample, NewMood};
use crate::store::{Store, StoreError};

/// Postgres-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_mood(&self, user_id: Uuid, mood: &NewMood) -> Result<MoodRow, StoreError> {
        let row = sqlx::query_as::<_, MoodRow>(
            r#"
            INSERT INTO moods (id, user_id, mood_value, mood_score, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&mood.mood_value)
        .bind(mood.mood_score)
        .bind(&mood.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoRowsReturned("moods"))?;

        info!("Inserted mood {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn get_user_moods(&self, user_id: Uuid, limit: i64) -> Result<Vec<MoodRow>, StoreError> {
        Ok(sqlx::query_as::<_, MoodRow>(
            "SELECT * FROM moods WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_moods_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodSample>, StoreError> {
        Ok(sqlx::query_as::<_, MoodSample>(
            r#"
            SELECT mood_score, created_at
            FROM moods
            WHERE user_id = $1 AND created_at >= $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_journal_entry(
        &self,
        user_id: Uuid,
        entry: &NewJournalEntry,
    ) -> Result<JournalEntryRow, StoreError> {
        let row = sqlx::query_as::<_, JournalEntryRow>(
            r#"
            INSERT INTO journal_entries (id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&entry.title)
        .bind(&entry.content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoRowsReturned("journal_entries"))?;

        info!("Inserted journal entry {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn get_user_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntryRow>, StoreError> {
        Ok(sqlx::query_as::<_, JournalEntryRow>(
            "SELECT * FROM journal_entries WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_insight(
        &self,
        user_id: Uuid,
        insight: &NewInsight,
    ) -> Result<InsightRow, StoreError> {
        let row = sqlx::query_as::<_, InsightRow>(
            r#"
            INSERT INTO insights (id, user_id, insight_type, content, data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&insight.insight_type)
        .bind(&insight.content)
        .bind(&insight.data)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoRowsReturned("insights"))?;

        info!(
            "Inserted {} insight {} for user {user_id}",
            row.insight_type, row.id
        );
        Ok(row)
    }

    async fn get_user_insights(
        &self,
        user_id: Uuid,
        insight_type: Option<&str>,
        limit: i64,
    ) -> Result<Vec<InsightRow>, StoreError> {
        // NULL type matches every row
        Ok(sqlx::query_as::<_, InsightRow>(
            r#"
            SELECT * FROM insights
            WHERE user_id = $1 AND ($2::text IS NULL OR insight_type = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(insight_type)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
