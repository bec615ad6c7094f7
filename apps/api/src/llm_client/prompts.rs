// Shared prompt constants and prompt-building utilities.
// Each agent module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to prompts whose reply is parsed as JSON.
/// Replies are still carved defensively; models ignore this often enough.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences.";

/// Tone guardrail shared by every user-facing generation.
pub const SUPPORTIVE_TONE: &str = "Be warm, non-judgmental and encouraging. \
    Never diagnose, and never give medical advice.";

/// Fills `{name}` placeholders in a template in a single pass, so text inserted
/// for one placeholder is never expanded again. Unknown placeholders are left as-is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = values.iter().find(|(name, _)| {
            tail[1..].starts_with(name) && tail[1 + name.len()..].starts_with('}')
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
