/// Labels considered negative when looking for a downward spiral.
const NEGATIVE_MOODS: &[&str] = &["sad", "anxious", "angry", "tired"];

/// How many recent labels the spiral check looks at, and how many must be negative.
const SPIRAL_WINDOW: usize = 5;
const SPIRAL_THRESHOLD: usize = 3;

#[derive(Debug, Default)]
pub struct MoodLog {
    entries: Vec<String>,
}

impl MoodLog {
    pub fn log(&mut self, mood: &str) -> String {
        self.entries.push(mood.to_string());
        format!("Mood '{mood}' has been logged.")
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn analyze(&self) -> &'static str {
        if self.entries.is_empty() {
            return "No mood data available yet.";
        }
        let start = self.entries.len().saturating_sub(SPIRAL_WINDOW);
        let negative = self.entries[start..]
            .iter()
            .filter(|m| NEGATIVE_MOODS.contains(&m.to_lowercase().as_str()))
            .count();
        if negative >= SPIRAL_THRESHOLD {
            "You might be in a negative spiral. Take care of yourself."
        } else {
            "You're doing okay! Keep tracking your moods."
        }
    }
}
