//! Persistence capability used by handlers and agents.
//!
//! `AppState` holds an `Arc<dyn Store>`; production wires in [`PgStore`],
//! tests wire in an in-memory fake. Every list is returned newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::insight::{InsightRow, NewInsight};
use crate::models::journal::{JournalEntryRow, NewJournalEntry};
use crate::models::mood::{MoodRow, MoodSample, NewMood};

pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("insert into {0} returned no rows")]
    NoRowsReturned(&'static str),
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_mood(&self, user_id: Uuid, mood: &NewMood) -> Result<MoodRow, StoreError>;

    async fn get_user_moods(&self, user_id: Uuid, limit: i64) -> Result<Vec<MoodRow>, StoreError>;

    /// Score and timestamp of every mood created at or after `since`.
    async fn get_moods_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodSample>, StoreError>;

    async fn create_journal_entry(
        &self,
        user_id: Uuid,
        entry: &NewJournalEntry,
    ) -> Result<JournalEntryRow, StoreError>;

    async fn get_user_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntryRow>, StoreError>;

    async fn create_insight(
        &self,
        user_id: Uuid,
        insight: &NewInsight,
    ) -> Result<InsightRow, StoreError>;

    async fn get_user_insights(
        &self,
        user_id: Uuid,
        insight_type: Option<&str>,
        limit: i64,
    ) -> Result<Vec<InsightRow>, StoreError>;
}
