//! Journal-prompt generator: five fresh reflective prompts per call.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::journal::prompts::{JOURNAL_PROMPTS_TEMPLATE, PROMPT_COUNT};
use crate::llm_client::extract::extract_string_list;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION, SUPPORTIVE_TONE};
use crate::llm_client::Generator;

/// Served whenever no generated prompt is available.
pub const DEFAULT_JOURNAL_PROMPT: &str = "What are you grateful for today?";

/// Key lifted when the model answers with a lone `{"prompt": "..."}` object.
const PROMPT_KEY: &str = "prompt";

pub fn build_prompt() -> String {
    let count = PROMPT_COUNT.to_string();
    fill(
        JOURNAL_PROMPTS_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("tone", SUPPORTIVE_TONE),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Asks the model for prompts. Model failure yields an empty list.
pub async fn generate_journal_prompts(generator: &dyn Generator) -> Vec<String> {
    let reply = match generator.generate(&build_prompt()).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Journal prompt generation failed: {e}");
            return Vec::new();
        }
    };

    let prompts = extract_string_list(&reply, PROMPT_KEY, PROMPT_COUNT);
    info!("Generated {} journal prompts", prompts.len());
    prompts
}

/// Uniform pick over `prompts`, or [`DEFAULT_JOURNAL_PROMPT`] when empty.
pub fn pick_prompt<R: Rng + ?Sized>(prompts: &[String], rng: &mut R) -> String {
    prompts
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| DEFAULT_JOURNAL_PROMPT.to_string())
}
