//! Cognitive-support analyzer: CBT-style reading of the past week's moods and journals.
//!
//! Storage failures propagate. Model failures and unparseable replies yield a
//! result whose fields are all empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::extract::extract_object;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::llm_client::Generator;
use crate::models::journal::JournalEntryRow;
use crate::models::mood::MoodRow;
use crate::store::{Store, StoreError};
use crate::support::prompts::COGNITIVE_SUPPORT_TEMPLATE;

/// How many recent moods and journal entries are analyzed.
pub const HISTORY_LIMIT: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CognitiveSupportResult {
    pub cognitive_distortion: String,
    pub stress_patterns: Vec<String>,
    pub coping_mechanism: String,
    pub summary: String,
}

impl CognitiveSupportResult {
    /// Maps extracted fields; anything missing or mistyped falls back to empty.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            cognitive_distortion: text_field(fields.get("cognitive_distortion")),
            stress_patterns: list_field(fields.get("stress_patterns")),
            coping_mechanism: text_field(fields.get("coping_mechanism")),
            summary: text_field(fields.get("summary")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cognitive_distortion.is_empty()
            && self.stress_patterns.is_empty()
            && self.coping_mechanism.is_empty()
            && self.summary.is_empty()
    }
}

/// One line per mood: `date | value (score) | notes`.
pub fn render_moods(moods: &[MoodRow]) -> String {
    moods
        .iter()
        .map(|m| {
            format!(
                "{} | {} ({}) | {}",
                m.created_at.date_naive(),
                m.mood_value,
                m.mood_score,
                m.notes.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per entry: `date | title | content`.
pub fn render_journals(entries: &[JournalEntryRow]) -> String {
    entries
        .iter()
        .map(|j| {
            format!(
                "{} | {} | {}",
                j.created_at.date_naive(),
                j.title.as_deref().unwrap_or("No Title"),
                j.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(moods: &[MoodRow], entries: &[JournalEntryRow]) -> String {
    let mood_text = render_moods(moods);
    let journal_text = render_journals(entries);
    fill(
        COGNITIVE_SUPPORT_TEMPLATE,
        &[
            ("mood_text", mood_text.as_str()),
            ("journal_text", journal_text.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn analyze(
    store: &dyn Store,
    generator: &dyn Generator,
    user_id: Uuid,
) -> Result<CognitiveSupportResult, StoreError> {
    let moods = store.get_user_moods(user_id, HISTORY_LIMIT).await?;
    let entries = store.get_user_journal_entries(user_id, HISTORY_LIMIT).await?;
    info!(
        "Analyzing {} moods and {} journal entries for user {user_id}",
        moods.len(),
        entries.len()
    );

    let reply = match generator.generate(&build_prompt(&moods, &entries)).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Cognitive support generation failed: {e}");
            return Ok(CognitiveSupportResult::default());
        }
    };

    let result = CognitiveSupportResult::from_fields(&extract_object(&reply));
    if result.is_empty() {
        warn!("Cognitive support reply had no usable fields");
    }
    Ok(result)
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        // models sometimes answer with a list where one string was asked for
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn list_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::String(_) | Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{journal_entry, mood_row, FakeGenerator, FakeStore};

    #[tokio::test]
    async fn test_maps_parsed_fields() {
        let store = FakeStore::default();
        let generator = FakeGenerator::replying(
            r#"Here is my analysis:
```json
{
  "cognitive_distortion": "all-or-nothing thinking",
  "stress_patterns": ["deadlines", "poor sleep"],
  "coping_mechanism": "Write down three shades of grey between success and failure.",
  "summary": "You are carrying a lot this week."
}
```"#,
        );

        let result = analyze(&store, &generator, store.user_id()).await.unwrap();
        assert_eq!(result.cognitive_distortion, "all-or-nothing thinking");
        assert_eq!(result.stress_patterns, vec!["deadlines", "poor sleep"]);
        assert!(result.coping_mechanism.starts_with("Write down"));
        assert_eq!(result.summary, "You are carrying a lot this week.");
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_empty_fields() {
        let store = FakeStore::default();
        let generator = FakeGenerator::replying("I'm sorry, I can't help with that.");
        let result = analyze(&store, &generator, store.user_id()).await.unwrap();
        assert_eq!(result.coping_mechanism, "");
        assert_eq!(result.cognitive_distortion, "");
        assert!(result.stress_patterns.is_empty());
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_yields_empty_fields() {
        let store = FakeStore::default();
        let generator = FakeGenerator::failing();
        let result = analyze(&store, &generator, store.user_id()).await.unwrap();
        assert_eq!(result, CognitiveSupportResult::default());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let store = FakeStore::unavailable();
        let generator = FakeGenerator::replying("{}");
        assert!(analyze(&store, &generator, store.user_id()).await.is_err());
        assert!(generator.last_prompt().is_none(), "model must not be called");
    }

    #[tokio::test]
    async fn test_prompt_embeds_both_histories() {
        let store = FakeStore::default();
        store.seed_mood(mood_row("anxious", 3, Some("big presentation"), "2024-06-08T09:00:00Z"));
        store.seed_entry(journal_entry(None, "Could not sleep again.", "2024-06-08T22:00:00Z"));
        let generator = FakeGenerator::replying("{}");

        analyze(&store, &generator, store.user_id()).await.unwrap();

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("2024-06-08 | anxious (3) | big presentation"));
        assert!(prompt.contains("2024-06-08 | No Title | Could not sleep again."));
    }

    #[test]
    fn test_mistyped_fields_are_coerced_or_defaulted() {
        let fields = serde_json::json!({
            "cognitive_distortion": ["labeling", "mind reading"],
            "stress_patterns": "work",
            "coping_mechanism": 42
        });
        let result = CognitiveSupportResult::from_fields(fields.as_object().unwrap());
        assert_eq!(result.cognitive_distortion, "labeling, mind reading");
        assert_eq!(result.stress_patterns, vec!["work"]);
        assert_eq!(result.coping_mechanism, "");
        assert_eq!(result.summary, "");
    }
}
