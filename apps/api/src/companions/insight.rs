/// Only the most recent entries feed the insight.
const RECENT_WINDOW: usize = 10;

#[derive(Debug, Default)]
pub struct InsightCounter {
    entries: Vec<String>,
}

impl InsightCounter {
    pub fn log_entry(&mut self, mood: &str) {
        self.entries.push(mood.to_string());
    }

    /// Most frequent label among the last ten; ties go to the label seen first.
    pub fn insight(&self) -> String {
        let start = self.entries.len().saturating_sub(RECENT_WINDOW);
        let recent = &self.entries[start..];

        // (label, count) in first-seen order
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for label in recent {
            match counts.iter_mut().find(|(seen, _)| *seen == label.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.as_str(), 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (label, n) in counts {
            if best.map_or(true, |(_, top)| n > top) {
                best = Some((label, n));
            }
        }

        match best {
            Some((label, _)) => format!("Your most frequent mood recently is: {label}"),
            None => "No entries yet to generate insights.".to_string(),
        }
    }
}
