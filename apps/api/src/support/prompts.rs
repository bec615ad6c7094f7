// All LLM prompt constants for the Support module.

/// Affirmation template. Replace `{user_info}`, `{user_mood}`, `{latest_journals}`, `{tone}`.
pub const AFFIRMATION_TEMPLATE: &str = r#"Generate a single motivational affirmation or quote based on the user's context:
User Info: {user_info}
Current Mood: {user_mood}
Recent Journal Entries: {latest_journals}
Create an uplifting, personalized affirmation that resonates with their current state. If mood and journals are empty, focus on the user info. Keep it concise and inspiring.
{tone}
Reply with the affirmation only."#;

/// Cognitive support template. Replace `{mood_text}`, `{journal_text}`, `{json_only}`.
pub const COGNITIVE_SUPPORT_TEMPLATE: &str = r#"Analyze the following user data from the past week.

Moods:
{mood_text}

Journal Entries:
{journal_text}

1. Identify cognitive distortions.
2. Identify stress patterns or emotional triggers.
3. Suggest one CBT-style coping mechanism.

Return a JSON object with this EXACT schema:
{
  "cognitive_distortion": "string",
  "stress_patterns": ["pattern1", "pattern2"],
  "coping_mechanism": "string",
  "summary": "short emotional insight"
}

{json_only}"#;
