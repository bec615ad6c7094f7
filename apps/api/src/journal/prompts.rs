// All LLM prompt constants for the Journal module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Number of reflective prompts requested per call.
pub const PROMPT_COUNT: usize = 5;

/// Journal prompt template. Replace `{count}`, `{tone}`, `{json_only}` before sending.
pub const JOURNAL_PROMPTS_TEMPLATE: &str = r#"Generate exactly {count} short, reflective journaling prompts for someone tending to their emotional wellbeing.
Each prompt is a single open question of at most 20 words.
Vary the themes: gratitude, emotions, relationships, growth, rest.
{tone}

Return a JSON array of strings:
["prompt 1", "prompt 2", "prompt 3", "prompt 4", "prompt 5"]

{json_only}"#;

/// Entry reflection template. Replace `{tone}`, `{entry}` before sending.
pub const REFLECTION_TEMPLATE: &str = r#"Reflect on this journal entry and provide emotional insights.
Name the feelings you notice, gently point out any recurring themes, and end with one question the writer could explore next.
{tone}

Journal entry:
{entry}"#;
