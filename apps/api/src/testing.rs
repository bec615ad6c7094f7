//! Test doubles for the `Generator` and `Store` capabilities.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::companions::Companions;
use crate::config::{Config, DEFAULT_GEMINI_MODEL, DEFAULT_USER_ID};
use crate::llm_client::{Generator, LlmError};
use crate::models::insight::{InsightRow, NewInsight};
use crate::models::journal::{JournalEntryRow, NewJournalEntry};
use crate::models::mood::{MoodRow, MoodSample, NewMood};
use crate::moods::trend::parse_utc_timestamp;
use crate::state::AppState;
use crate::store::{Store, StoreError};

pub fn default_user() -> Uuid {
    DEFAULT_USER_ID.parse().unwrap()
}

pub fn at(raw: &str) -> DateTime<Utc> {
    parse_utc_timestamp(raw).unwrap()
}

pub fn mood_row(value: &str, score: i32, notes: Option<&str>, created_at: &str) -> MoodRow {
    MoodRow {
        id: Uuid::new_v4(),
        user_id: default_user(),
        mood_value: value.to_string(),
        mood_score: score,
        notes: notes.map(str::to_string),
        created_at: at(created_at),
    }
}

pub fn journal_entry(title: Option<&str>, content: &str, created_at: &str) -> JournalEntryRow {
    JournalEntryRow {
        id: Uuid::new_v4(),
        user_id: default_user(),
        title: title.map(str::to_string),
        content: content.to_string(),
        sentiment_score: None,
        created_at: at(created_at),
        updated_at: at(created_at),
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        google_api_key: "test-key".to_string(),
        gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        llm_timeout_secs: 1,
        db_acquire_timeout_secs: 1,
        user_id: default_user(),
        user_profile: "Test user who journals at night.".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(store: Arc<FakeStore>, generator: Arc<FakeGenerator>) -> AppState {
    AppState {
        store,
        generator,
        companions: Arc::new(Companions::new()),
        config: test_config(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FakeGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Replies with a fixed text (or fails) and records every prompt it receives.
pub struct FakeGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| LlmError::Api {
            status: 503,
            message: "model unavailable".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FakeStore
// ────────────────────────────────────────────────────────────────────────────

/// In-memory store. `unavailable()` makes every call fail like a dead pool.
pub struct FakeStore {
    user_id: Uuid,
    unavailable: bool,
    moods: Mutex<Vec<MoodRow>>,
    entries: Mutex<Vec<JournalEntryRow>>,
    insights: Mutex<Vec<InsightRow>>,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            user_id: default_user(),
            unavailable: false,
            moods: Mutex::new(Vec::new()),
            entries: Mutex::new(Vec::new()),
            insights: Mutex::new(Vec::new()),
        }
    }
}

impl FakeStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn seed_mood(&self, mood: MoodRow) {
        self.moods.lock().unwrap().push(mood);
    }

    pub fn seed_entry(&self, entry: JournalEntryRow) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn insights(&self) -> Vec<InsightRow> {
        self.insights.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

fn newest_first<T: Clone>(
    rows: &[T],
    created_at: impl Fn(&T) -> DateTime<Utc>,
    keep: impl Fn(&T) -> bool,
    limit: i64,
) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().filter(|r| keep(r)).cloned().collect();
    out.sort_by_key(|r| std::cmp::Reverse(created_at(r)));
    out.truncate(usize::try_from(limit).unwrap_or(0));
    out
}

#[async_trait]
impl Store for FakeStore {
    async fn create_mood(&self, user_id: Uuid, mood: &NewMood) -> Result<MoodRow, StoreError> {
        self.check()?;
        let row = MoodRow {
            id: Uuid::new_v4(),
            user_id,
            mood_value: mood.mood_value.clone(),
            mood_score: mood.mood_score,
            notes: mood.notes.clone(),
            created_at: Utc::now(),
        };
        self.moods.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_user_moods(&self, user_id: Uuid, limit: i64) -> Result<Vec<MoodRow>, StoreError> {
        self.check()?;
        let moods = self.moods.lock().unwrap();
        Ok(newest_first(moods.as_slice(), |m| m.created_at, |m| m.user_id == user_id, limit))
    }

    async fn get_moods_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodSample>, StoreError> {
        self.check()?;
        Ok(self
            .moods
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id && m.created_at >= since)
            .map(|m| MoodSample {
                mood_score: m.mood_score,
                created_at: m.created_at,
            })
            .collect())
    }

    async fn create_journal_entry(
        &self,
        user_id: Uuid,
        entry: &NewJournalEntry,
    ) -> Result<JournalEntryRow, StoreError> {
        self.check()?;
        let now = Utc::now();
        let row = JournalEntryRow {
            id: Uuid::new_v4(),
            user_id,
            title: entry.title.clone(),
            content: entry.content.clone(),
            sentiment_score: None,
            created_at: now,
            updated_at: now,
        };
        self.entries.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_user_journal_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<JournalEntryRow>, StoreError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(newest_first(entries.as_slice(), |e| e.created_at, |e| e.user_id == user_id, limit))
    }

    async fn create_insight(
        &self,
        user_id: Uuid,
        insight: &NewInsight,
    ) -> Result<InsightRow, StoreError> {
        self.check()?;
        let row = InsightRow {
            id: Uuid::new_v4(),
            user_id,
            insight_type: insight.insight_type.clone(),
            content: insight.content.clone(),
            data: insight.data.clone(),
            created_at: Utc::now(),
        };
        self.insights.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_user_insights(
        &self,
        user_id: Uuid,
        insight_type: Option<&str>,
        limit: i64,
    ) -> Result<Vec<InsightRow>, StoreError> {
        self.check()?;
        let insights = self.insights.lock().unwrap();
        Ok(newest_first(
            insights.as_slice(),
            |i| i.created_at,
            |i| i.user_id == user_id && insight_type.map_or(true, |t| i.insight_type == t),
            limit,
        ))
    }
}
