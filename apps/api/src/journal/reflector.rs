//! Entry reflector: the model's reflection on one journal entry, verbatim.

use tracing::warn;

use crate::journal::prompts::REFLECTION_TEMPLATE;
use crate::llm_client::prompts::{fill, SUPPORTIVE_TONE};
use crate::llm_client::Generator;

pub const REFLECTION_FALLBACK: &str =
    "Thank you for writing this down. Take a moment to notice how you feel after putting it into words.";

pub async fn reflect_on_entry(generator: &dyn Generator, entry: &str) -> String {
    let prompt = fill(
        REFLECTION_TEMPLATE,
        &[("tone", SUPPORTIVE_TONE), ("entry", entry)],
    );

    match generator.generate(&prompt).await {
        Ok(reflection) => reflection,
        Err(e) => {
            warn!("Entry reflection failed: {e}");
            REFLECTION_FALLBACK.to_string()
        }
    }
}
