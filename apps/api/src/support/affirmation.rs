//! Affirmation generator.

use tracing::warn;

use crate::llm_client::prompts::{fill, SUPPORTIVE_TONE};
use crate::llm_client::Generator;
use crate::support::prompts::AFFIRMATION_TEMPLATE;

/// Returned on any generation failure. Fixed; never derived from failed output.
pub const AFFIRMATION_FALLBACK: &str = "You are capable of amazing things. Trust in your journey.";

/// What the affirmation is personalised with. Empty strings are allowed.
#[derive(Debug, Clone, Default)]
pub struct AffirmationContext {
    pub user_info: String,
    pub user_mood: String,
    pub latest_journals: String,
}

pub fn build_prompt(context: &AffirmationContext) -> String {
    fill(
        AFFIRMATION_TEMPLATE,
        &[
            ("user_info", context.user_info.as_str()),
            ("user_mood", context.user_mood.as_str()),
            ("latest_journals", context.latest_journals.as_str()),
            ("tone", SUPPORTIVE_TONE),
        ],
    )
}

pub async fn generate_affirmation(generator: &dyn Generator, context: &AffirmationContext) -> String {
    match generator.generate(&build_prompt(context)).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("Affirmation generation returned blank text");
            AFFIRMATION_FALLBACK.to_string()
        }
        Err(e) => {
            warn!("Failed to generate affirmation: {e}");
            AFFIRMATION_FALLBACK.to_string()
        }
    }
}
